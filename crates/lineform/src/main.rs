use lineform::runtime::{boot, run};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    boot::init_logging();
    let (parser, config, metrics) = boot::boot()?;
    run::run_stdio(&parser, &config, &metrics).await
}
