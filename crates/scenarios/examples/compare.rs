//! Projects three decay scenarios and prints them side by side.
//!
//! Run with `cargo run -p stepwise-scenarios --example compare`.

use stepwise_scenarios::{Parameter, ScenarioError, ScenarioSet};

fn main() -> Result<(), ScenarioError> {
    let mut set = ScenarioSet::default();

    let faster = set.add()?;
    set.update(faster, Parameter::Effectiveness, 0.3)?;

    let slower = set.add()?;
    set.update(slower, Parameter::Effectiveness, 0.05)?;
    set.update(slower, Parameter::Decline, 0.02)?;

    for (index, scenario) in set.scenarios().iter().enumerate() {
        let model = scenario.model();
        println!(
            "{}: effectiveness {}, decline {} ({})",
            ScenarioSet::label(index),
            model.effectiveness,
            model.decline,
            scenario.color(),
        );
    }
    println!();

    let series = set.series();
    let header: Vec<String> = series.iter().map(|s| format!("{:>12}", s.label)).collect();
    println!("{:<8}{}", "", header.join(""));

    for (row, year) in set.year_labels().iter().enumerate() {
        let cells: Vec<String> = series
            .iter()
            .map(|s| format!("{:>12.2}", s.values[row]))
            .collect();
        println!("{year:<8}{}", cells.join(""));
    }

    Ok(())
}
