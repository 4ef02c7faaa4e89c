use std::error::Error;
use std::path::PathBuf;

use clap::{Args, Subcommand};

use ptx_engine::ParamCard;

#[derive(Args, Debug)]
pub struct CardArgs {
    #[command(subcommand)]
    pub action: CardAction,
}

#[derive(Subcommand, Debug)]
pub enum CardAction {
    /// Print the value of one card entry.
    Get {
        /// Path to the parameter card.
        #[arg(long)]
        card: PathBuf,
        /// Section tag: a BLOCK name or DECAY.
        #[arg(long)]
        block: String,
        /// Entry identifier (PDG code or parameter index).
        #[arg(long)]
        id: i32,
    },
    /// Overwrite the value of one card entry in place.
    Set {
        /// Path to the parameter card.
        #[arg(long)]
        card: PathBuf,
        /// Section tag: a BLOCK name or DECAY.
        #[arg(long)]
        block: String,
        /// Entry identifier (PDG code or parameter index).
        #[arg(long)]
        id: i32,
        /// New value for the entry.
        #[arg(long)]
        value: f64,
    },
}

pub fn run(args: &CardArgs) -> Result<(), Box<dyn Error>> {
    match &args.action {
        CardAction::Get { card, block, id } => {
            let card = ParamCard::load(card).map_err(|err| Box::new(err) as Box<dyn Error>)?;
            report_warnings(&card);
            match card.get(block, *id) {
                Some(value) => {
                    let comment = card.comment(block, *id).unwrap_or_default();
                    if comment.is_empty() {
                        println!("{value:e}");
                    } else {
                        println!("{value:e} # {comment}");
                    }
                    Ok(())
                }
                None => Err(format!("no entry {block}:{id} on the card").into()),
            }
        }
        CardAction::Set {
            card,
            block,
            id,
            value,
        } => {
            let mut parsed =
                ParamCard::load(card).map_err(|err| Box::new(err) as Box<dyn Error>)?;
            report_warnings(&parsed);
            parsed
                .set(block, *id, *value)
                .map_err(|err| Box::new(err) as Box<dyn Error>)?;
            parsed.save().map_err(|err| Box::new(err) as Box<dyn Error>)?;
            println!("{block}:{id} = {value:e}");
            Ok(())
        }
    }
}

fn report_warnings(card: &ParamCard) {
    for line in card.warnings() {
        eprintln!("warning: unparseable card line: {line}");
    }
}
