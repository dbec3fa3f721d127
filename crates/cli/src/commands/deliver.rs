//! Driver delivery-run simulation.

use quickdash_core::OrderId;
use quickdash_market::dispatch::{DispatchError, Dispatcher, RUN_STEPS, RunProgress};
use quickdash_market::fixtures;

/// Run a delivery end to end: accept the order, then advance through every
/// step until completion, printing the run the way the driver screen shows
/// it.
#[allow(clippy::print_stdout)]
pub fn simulate(order_id: &str) -> Result<(), DispatchError> {
    let mut driver = fixtures::driver();
    driver.status = quickdash_core::DriverStatus::Online;
    let mut dispatcher = Dispatcher::new(driver, fixtures::available_orders());

    let order_id = OrderId::new(order_id);
    let run = dispatcher.accept(&order_id)?;
    println!(
        "Accepted {} from {} ({} items, total {})",
        run.order().id,
        run.order().store_name,
        run.order().items.len(),
        run.order().total
    );

    loop {
        match dispatcher.advance_run()? {
            RunProgress::Step(step) => {
                let label = RUN_STEPS
                    .iter()
                    .find(|entry| entry.step == step)
                    .map_or("", |entry| entry.label);
                println!("  -> {label}");
            }
            RunProgress::Completed(_) => {
                println!("  -> Order Delivered");
                println!(
                    "Delivery complete: {} now {} with {} total deliveries",
                    dispatcher.driver().name,
                    dispatcher.driver().status,
                    dispatcher.driver().total_deliveries
                );
                return Ok(());
            }
        }
    }
}
