//! Validate command - check a typed answer for a contact field.

use clap::{Args, ValueEnum};
use console::style;

use resumex_core::{Field, check_answer};

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Field the value is an answer for
    #[arg(value_enum)]
    field: FieldArg,

    /// Value typed by the candidate
    value: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FieldArg {
    Name,
    Email,
    Phone,
}

impl From<FieldArg> for Field {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Name => Field::Name,
            FieldArg::Email => Field::Email,
            FieldArg::Phone => Field::Phone,
        }
    }
}

pub async fn run(args: ValidateArgs) -> anyhow::Result<()> {
    let field = Field::from(args.field);

    match check_answer(field, &args.value) {
        Ok(value) => {
            println!("{} {}: {}", style("✓").green(), field, value);
            Ok(())
        }
        Err(rejection) => {
            eprintln!("{} {}", style("✗").red(), rejection);
            std::process::exit(1);
        }
    }
}
