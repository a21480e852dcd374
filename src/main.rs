use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use customer_events::domain::customer::{Address, Customer, CustomerDispatcher, CustomerHandlers};

fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=trace cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,customer_events=debug")),
        )
        .init();

    // One dispatcher for the whole process, handlers wired here only
    let dispatcher = CustomerDispatcher::shared();
    CustomerHandlers::register_defaults(&dispatcher);
    tracing::info!(?dispatcher, "Event handlers registered");

    let mut customer = Customer::new("1", "Customer 1", dispatcher.clone())?;

    customer.change_address(Address::new("Street 1", 123, "13330-250", "São Paulo")?)?;
    customer.activate()?;
    customer.add_reward_points(10);

    tracing::info!(
        customer_id = customer.id(),
        active = customer.is_active(),
        reward_points = customer.reward_points(),
        "Customer lifecycle complete"
    );

    dispatcher.unregister_all();
    Ok(())
}
