use anyhow::Result;
use clap::Args;
use life_census::PatternCatalog;

#[derive(Args, Debug)]
pub(super) struct CatalogArgs {
    /// Also print every mask, `*` marks a cell that must be alive, `.` one that must be dead
    #[arg(short, long)]
    masks: bool,
}

pub(super) fn run_catalog(args: CatalogArgs) -> Result<()> {
    for entry in PatternCatalog::standard().all_entries() {
        println!("{} - {}, {} mask(s)", entry.name, entry.kind, entry.masks.len());
        if args.masks {
            for mask in &entry.masks {
                println!("{mask}");
            }
        }
    }
    Ok(())
}
