use travesty_core::configuration::DEFAULT_ORDER;
use travesty_core::{ChainTable, Generator, Order, RngSource, ScriptedSource, TravestyError, generate};

const SOURCE: &str = "Twinkle, twinkle, little star, how I wonder what you are! \
Up above the world so high, like a diamond in the sky.";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A generator owns its order and its random source.
    // A fixed seed makes every run print the same text
    let mut app = Generator::new(DEFAULT_ORDER, RngSource::seeded(1984))?;

    // Generating before any analysis is refused
    match app.generate(10) {
        Err(TravestyError::ModelNotReady) => println!("No model yet, analyze first"),
        _ => println!("Should not happen"),
    }

    // Build the chain table of the source text
    app.analyze(SOURCE)?;
    if let Some(model) = app.model() {
        println!(
            "{} keys of order {} from {} characters",
            model.len(),
            model.order(),
            model.source_len()
        );
    }

    // Orders outside 1..=10 are rejected
    match Generator::new(11, RngSource::seeded(0)) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("{e}"),
    }

    // Generate 3 travesties; output may run a few characters past the request
    for i in 0..3 {
        let report = app.generate_with_report(80)?;
        println!("Travesty {} ({} restarts): {}", i + 1, report.restarts, report.text);
    }

    // The model can also be built and walked directly.
    // A scripted source of zeros always takes the first key and the first continuation
    let model = ChainTable::analyze(SOURCE, Order::new(8)?)?;
    println!("First choices: {}", generate(&model, 40, &mut ScriptedSource::zeros())?);

    Ok(())
}
