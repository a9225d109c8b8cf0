use tracing::info;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use variate::GeneratorFactory;
use variate::trial;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let factory = GeneratorFactory;
    for trial in trial::all() {
        let outcome = match trial.run(&factory) {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(kind = %trial.kind, %error, "skipping trial");
                continue;
            }
        };

        match trial.nominal() {
            Some(nominal) => println!("{} nominal: {nominal}", trial.kind),
            None => println!("{}", trial.kind),
        }
        println!("Expected mean: {}", outcome.expected);
        println!("Computed: {}", outcome.computed);
    }

    info!("all trials finished");
}
