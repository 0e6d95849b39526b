use crate::catalog::schema::{PriceBook, PriceDef};
use crate::error::EstimatorError;
use crate::model::{ScheduleResult, TakeoffLine};
use rust_decimal::Decimal;

/// Unit used when a scope has no entry in the price book.
pub const DEFAULT_UNIT: &str = "EA";

/// Turn schedule results into takeoff lines, one per result, in order.
///
/// Scopes missing from the price book keep their quantity but get no cost.
/// Fails when an extended cost does not fit in a `Decimal`.
pub fn price_takeoff(
    results: &[ScheduleResult],
    book: &PriceBook,
) -> Result<Vec<TakeoffLine>, EstimatorError> {
    results
        .iter()
        .map(|result| -> Result<TakeoffLine, EstimatorError> {
            let price = find_price(book, &result.scope);
            if price.is_none() {
                log::debug!("no price for scope '{}' in '{}'", result.scope, book.name);
            }

            let extended_cost = match price {
                Some(p) => Some(
                    p.unit_cost
                        .checked_mul(Decimal::from(result.count))
                        .ok_or_else(|| {
                            EstimatorError::PricingOverflow(format!(
                                "{} x {} for scope '{}' on page {}",
                                result.count, p.unit_cost, result.scope, result.source_page
                            ))
                        })?,
                ),
                None => None,
            };

            Ok(TakeoffLine {
                scope: result.scope.clone(),
                quantity: result.count,
                unit: price
                    .map(|p| p.unit.clone())
                    .unwrap_or_else(|| DEFAULT_UNIT.to_string()),
                unit_cost: price.map(|p| p.unit_cost),
                extended_cost,
                source_page: result.source_page,
                sizes: result.sizes.clone(),
            })
        })
        .collect()
}

/// Sum of all priced lines. Unpriced lines contribute nothing.
pub fn takeoff_total(lines: &[TakeoffLine]) -> Result<Decimal, EstimatorError> {
    lines
        .iter()
        .filter_map(|l| l.extended_cost)
        .try_fold(Decimal::ZERO, |total, cost| {
            total.checked_add(cost).ok_or_else(|| {
                EstimatorError::PricingOverflow(format!("total exceeds {}", Decimal::MAX))
            })
        })
}

/// Case folding shared by price lookup and price book validation.
pub(crate) fn scope_key(scope: &str) -> String {
    scope.to_lowercase()
}

fn find_price<'a>(book: &'a PriceBook, scope: &str) -> Option<&'a PriceDef> {
    let key = scope_key(scope);
    book.prices.iter().find(|p| scope_key(&p.scope) == key)
}
