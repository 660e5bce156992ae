use clap::Parser;

use tabula::{reports, Verdict};

mod catalog;

/// Classify propositional formulas with analytic tableaux.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Classify the catalog formula at this index.
    #[arg(short, long, value_name = "N", conflicts_with = "formula")]
    index: Option<usize>,

    /// List the catalog and exit.
    #[arg(short, long)]
    list: bool,

    /// Print the prefix rendering of the formula as well.
    #[arg(short, long)]
    prefix: bool,

    /// A formula to classify, e.g. "(a -> b) <-> (~b -> ~a)".
    formula: Option<String>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if cli.list {
        for (index, entry) in catalog::CATALOG.iter().enumerate() {
            println!("{index:3}  {entry}");
        }
        return;
    }

    let text = match (cli.index, cli.formula.as_deref()) {
        (Some(index), _) => match catalog::CATALOG.get(index) {
            Some(entry) => *entry,
            None => {
                eprintln!(
                    "no catalog entry {index}; the catalog holds {} (try --list)",
                    catalog::CATALOG.len()
                );
                std::process::exit(2);
            }
        },
        (None, Some(text)) => text,
        (None, None) => {
            eprintln!("a formula or a catalog index is required (try --list)");
            std::process::exit(2);
        }
    };

    let formula = match tabula::parse(text) {
        Ok(formula) => formula,
        Err(e) => {
            eprintln!("parse error in {text:?}: {e:?}");
            std::process::exit(1);
        }
    };

    println!("formula: {formula}");
    if cli.prefix {
        println!("prefix:  {}", formula.prefix());
    }

    let verdict = tabula::classify(&formula);
    println!("verdict: {verdict}");

    match &verdict {
        Verdict::Tautology { causes } | Verdict::Contradiction { causes } => {
            for cause in causes {
                println!("  breaks without {}", reports::cause_string(cause));
            }
        }
        Verdict::Contingency { true_on, false_on } => {
            for witness in true_on {
                println!("  true on  {}", reports::witness_string(witness));
            }
            for witness in false_on {
                println!("  false on {}", reports::witness_string(witness));
            }
        }
    }
}
