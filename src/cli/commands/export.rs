use anyhow::Result;

use super::super::{args::ExportCommand, context::CommandContext, exit_status::ExitStatus, report};
use crate::render::render_json;

pub fn export(cmd: ExportCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;

    let json = match &cmd.locale {
        Some(locale) => {
            let translations = ctx.catalog.get_translations(locale, cmd.include.as_slice())?;
            if ctx.verbose {
                report::note(format!("Exporting {} key(s) for {}", translations.len(), locale));
            }
            render_json(&translations, cmd.pretty)?
        }
        None => {
            let translations = ctx.catalog.all_translations(cmd.include.as_slice())?;
            if ctx.verbose {
                report::note(format!("Exporting {} locale(s)", translations.len()));
            }
            render_json(&translations, cmd.pretty)?
        }
    };

    println!("{}", json);
    Ok(ExitStatus::Success)
}
