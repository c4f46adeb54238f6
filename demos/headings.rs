//! Prints the NACO comparison form of each heading given on the command line,
//! or of a few sample MARC fields when none are given.
//!
//! ```text
//! cargo run --example headings -- "Brontë, Emily, 1818-1848." "Brontë, Emily"
//! ```

use naco::Naco;

const SAMPLES: &[&str] = &[
    "$aShakespeare, William, $d1564-1616.",
    "$aO'Kelley, Mattie Lou.",
    "$aAll-romanized English-Japanese dictionary / $cHyåojun Råomaji Kai.",
    "Þórður Guðjohnsen",
];

fn main() -> Result<(), naco::NacoError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let headings: Vec<&str> = if args.is_empty() {
        SAMPLES.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };

    let keep = Naco::builder().keep_first_comma(true).build();
    let drop = Naco::builder().keep_first_comma(false).build();

    for heading in &headings {
        println!("{heading}");
        println!("  keep first comma: {}", keep.normalize(heading)?);
        println!("  drop commas:      {}", drop.normalize(heading)?);
    }

    if let [a, b, ..] = headings.as_slice() {
        println!("first two match: {}", keep.is_match(a, b)?);
    }
    Ok(())
}
