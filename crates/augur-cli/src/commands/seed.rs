use augur_draw::derive_seed;

pub fn run(identity: &str, date: Option<&str>) -> Result<(), String> {
    let date = super::parse_date(date)?;
    println!("{}", derive_seed(identity, date));
    Ok(())
}
