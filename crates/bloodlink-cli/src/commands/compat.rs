//! Compatibility lookup commands.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use bloodlink_core::error::AppError;
use bloodlink_entity::BloodType;
use bloodlink_service::compatibility;

use crate::output::{self, OutputFormat};

/// Arguments for the compat command
#[derive(Debug, Args)]
pub struct CompatArgs {
    /// Blood type, e.g. `AB+` or `O-`
    pub blood_type: String,

    /// List the recipients this type can give to instead
    #[arg(long)]
    pub recipients: bool,
}

/// One compatible type.
#[derive(Debug, Serialize, Tabled)]
struct TypeRow {
    #[tabled(rename = "Type")]
    blood_type: String,
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "Rh")]
    rh: String,
}

impl From<BloodType> for TypeRow {
    fn from(bt: BloodType) -> Self {
        Self {
            blood_type: bt.to_string(),
            group: bt.group.to_string(),
            rh: bt.rh.to_string(),
        }
    }
}

/// Execute the compat command
pub fn execute(args: &CompatArgs, format: OutputFormat) -> Result<(), AppError> {
    let blood_type: BloodType = args.blood_type.parse()?;
    let types = if args.recipients {
        compatibility::compatible_recipient_types(blood_type)
    } else {
        compatibility::compatible_donor_types(blood_type)
    };

    if format == OutputFormat::Table {
        let label = if args.recipients {
            format!("{} can donate to:", blood_type)
        } else {
            format!("{} can receive from:", blood_type)
        };
        output::print_heading(&label);
    }
    let rows: Vec<TypeRow> = types.into_iter().map(TypeRow::from).collect();
    output::print_list(&rows, format);
    Ok(())
}
