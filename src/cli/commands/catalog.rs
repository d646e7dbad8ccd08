//! Catalog command handler

use gradecalc::core::catalog::Catalog;

/// Print the credit standard and the selectable culture courses
pub fn run() {
    let catalog = Catalog::standard();
    let credits = catalog.credits();

    println!("\n=== Credit Standard ===\n");
    println!("  Language course: {:.1}", credits.language);
    println!("  Major course:    {:.1}", credits.major);

    println!("\n=== Culture Courses ===\n");
    let width = catalog
        .culture_options()
        .iter()
        .map(|option| option.key.len())
        .max()
        .unwrap_or(0);
    for (index, option) in catalog.culture_options().iter().enumerate() {
        let marker = if index == 0 { " (default)" } else { "" };
        println!(
            "  {:<width$}  {:>4.1}  {}{marker}",
            option.key, option.credit, option.label
        );
    }
}
