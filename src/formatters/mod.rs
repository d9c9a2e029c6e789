use crate::schemas::CountryRecord;

/// Group digits in threes: `67391582` → `67,391,582`
pub fn format_population(population: u64) -> String {
    let digits = population.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One-line summary used by the non-interactive output
pub fn format_country_line(country: &CountryRecord, use_color: bool) -> String {
    use colored::Colorize;

    let capital = country.first_capital().unwrap_or("N/A");
    let population = format_population(country.population());

    if use_color {
        format!(
            "{} ({}) - capital: {}, population: {}",
            country.common_name().bright_green(),
            country.official_name().dimmed(),
            capital.bright_yellow(),
            population
        )
    } else {
        format!(
            "{} ({}) - capital: {}, population: {}",
            country.common_name(),
            country.official_name(),
            capital,
            population
        )
    }
}
