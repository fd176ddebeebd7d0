use augur_numerology::{CosmicBlueprint, LifeCycle, UserProfile, generate_blueprint, zodiac_sign};
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use super::Output;

pub fn run(
    name: &str,
    current_name: &str,
    maiden_name: &str,
    birth_date: &str,
    output: Output,
) -> Result<(), String> {
    let profile = UserProfile::new(name, birth_date)
        .with_current_name(current_name)
        .with_mothers_maiden_name(maiden_name);
    let blueprint = generate_blueprint(&profile);

    match output {
        Output::Json => return super::print_json(&blueprint),
        Output::Plain => {
            print!("{}", blueprint.summary());
            return Ok(());
        }
        Output::Styled => {}
    }

    println!("  {} {}", "Cosmic Blueprint".bold(), format!("for {name}").dimmed());
    match zodiac_sign(birth_date) {
        Some(sign) => println!("  Born {birth_date} · {sign}"),
        None => println!(
            "  {}",
            format!("birth date \"{birth_date}\" is not usable; date numbers are incomplete")
                .yellow()
        ),
    }
    println!();

    print_core(&blueprint);
    println!();
    print_cycles("Pinnacles", &blueprint.pinnacles);
    println!();
    print_cycles("Challenges", &blueprint.challenges);

    if blueprint.has_karmic_debt() {
        let debts: Vec<String> = blueprint.karmic_debts.iter().map(u32::to_string).collect();
        println!();
        println!("  {} {}", "Karmic debt:".red().bold(), debts.join(", "));
    }
    Ok(())
}

fn print_core(blueprint: &CosmicBlueprint) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Number", "Value", "Theme", "Description"]);
    for (label, n) in blueprint.core_numbers() {
        table.add_row(vec![
            label.to_string(),
            n.number.to_string(),
            n.theme.clone(),
            n.description.clone(),
        ]);
    }
    println!("{table}");
}

fn print_cycles(title: &str, cycles: &[LifeCycle; 4]) {
    println!("  {}", title.bold().underline());
    for (i, cycle) in cycles.iter().enumerate() {
        println!(
            "  {}. {:>2}  {}  {}",
            i + 1,
            cycle.number,
            cycle.theme,
            format!("({})", cycle.age_range).dimmed()
        );
    }
}
