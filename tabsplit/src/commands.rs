use crate::{CliResult, bootstrap::AppConfig};
use chrono::Utc;
use std::{borrow::Cow, fmt::Write as _, path::PathBuf};
use tabsplit_application::{Group, GroupError, GroupProcessor, StoreError};
use tabsplit_domain::Money;
use tabsplit_infrastructure::{BackupError, GroupBackup};
use tabsplit_presentation::{
    BackupPresenter, SettlementPresenter, SummaryPresenter, format_backup_error,
    format_group_error, format_store_error,
};

pub const USAGE: &str = "\
Usage: tabsplit <command> [args]

Commands:
  settle [backup.json]                    Show summary and who owes whom
  summary                                 Show the current group
  new <group name>                        Start a new group
  delete                                  Delete the current group
  add-participant <name>
  remove-participant <name>               Also removes the expenses they paid
  add-expense <description> <amount> <payer>
  edit-expense <number> <description> <amount> <payer>
  import <backup.json>                    Replace the current group with a backup
  export <directory>                      Write a backup of the current group";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Settle { backup: Option<PathBuf> },
    Summary,
    New { name: String },
    Delete,
    AddParticipant { name: String },
    RemoveParticipant { name: String },
    AddExpense { description: String, amount: Money, payer: String },
    EditExpense { index: usize, description: String, amount: Money, payer: String },
    Import { backup: PathBuf },
    Export { out_dir: PathBuf },
}

impl Command {
    pub fn parse(args: &[String]) -> CliResult<Self> {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let command = match args.as_slice() {
            ["settle"] => Self::Settle { backup: None },
            ["settle", backup] => Self::Settle {
                backup: Some(PathBuf::from(backup)),
            },
            ["summary"] => Self::Summary,
            ["new", name @ ..] if !name.is_empty() => Self::New {
                name: name.join(" "),
            },
            ["delete"] => Self::Delete,
            ["add-participant", name] => Self::AddParticipant {
                name: (*name).to_owned(),
            },
            ["remove-participant", name] => Self::RemoveParticipant {
                name: (*name).to_owned(),
            },
            ["add-expense", description, amount, payer] => Self::AddExpense {
                description: (*description).to_owned(),
                amount: parse_amount(amount)?,
                payer: (*payer).to_owned(),
            },
            ["edit-expense", number, description, amount, payer] => Self::EditExpense {
                index: parse_expense_number(number)?,
                description: (*description).to_owned(),
                amount: parse_amount(amount)?,
                payer: (*payer).to_owned(),
            },
            ["import", backup] => Self::Import {
                backup: PathBuf::from(backup),
            },
            ["export", out_dir] => Self::Export {
                out_dir: PathBuf::from(out_dir),
            },
            _ => return Err(USAGE.into()),
        };
        Ok(command)
    }
}

fn parse_amount(raw: &str) -> CliResult<Money> {
    raw.parse()
        .map_err(|_| format_group_error(&GroupError::NonPositiveAmount(Money::ZERO)).into())
}

fn parse_expense_number(raw: &str) -> CliResult<usize> {
    match raw.parse::<usize>() {
        Ok(number) if number > 0 => Ok(number - 1),
        _ => Err(tabsplit_i18n::invalid_expense_number(raw).into()),
    }
}

fn store_error(err: StoreError) -> Cow<'static, str> {
    format_store_error(&err).into()
}

fn backup_error(err: BackupError) -> Cow<'static, str> {
    format_backup_error(&err).into()
}

pub fn execute(
    command: Command,
    processor: &GroupProcessor<'_>,
    config: &AppConfig,
) -> CliResult<String> {
    let currency = config.currency.as_str();

    match command {
        Command::Settle { backup } => {
            let group = match backup {
                Some(path) => GroupBackup::read_from(&path)
                    .and_then(GroupBackup::into_group)
                    .map_err(backup_error)?,
                None => current_group(processor)?,
            };
            Ok(render_settlement(processor, &group, currency))
        }
        Command::Summary => {
            let group = current_group(processor)?;
            let mut output = SummaryPresenter::render(&group.summary(), currency);
            output.push('\n');
            output.push_str(&SummaryPresenter::render_expenses(group.expenses(), currency));
            Ok(output)
        }
        Command::New { name } => {
            let group = processor.create_group(&name).map_err(store_error)?;
            Ok(SummaryPresenter::render(&group.summary(), currency))
        }
        Command::Delete => {
            processor.delete_group().map_err(store_error)?;
            Ok(format!("{}\n", tabsplit_i18n::GROUP_DELETED))
        }
        Command::AddParticipant { name } => {
            processor
                .edit_group(|group| group.add_participant(&name))
                .map_err(store_error)?;
            summary_of_current(processor, currency)
        }
        Command::RemoveParticipant { name } => {
            processor
                .edit_group(|group| group.remove_participant(&name))
                .map_err(store_error)?;
            summary_of_current(processor, currency)
        }
        Command::AddExpense {
            description,
            amount,
            payer,
        } => {
            processor
                .edit_group(|group| group.add_expense(&description, amount, &payer))
                .map_err(store_error)?;
            summary_of_current(processor, currency)
        }
        Command::EditExpense {
            index,
            description,
            amount,
            payer,
        } => {
            processor
                .edit_group(|group| group.update_expense(index, &description, amount, &payer))
                .map_err(store_error)?;
            summary_of_current(processor, currency)
        }
        Command::Import { backup } => {
            let backup = GroupBackup::read_from(&backup).map_err(backup_error)?;
            let mut output = backup
                .preview()
                .map(|preview| BackupPresenter::render_preview(&preview))
                .map_err(backup_error)?;
            let group = backup.into_group().map_err(backup_error)?;
            processor.replace_group(&group).map_err(store_error)?;

            output.push('\n');
            output.push_str(&SummaryPresenter::render(&group.summary(), currency));
            Ok(output)
        }
        Command::Export { out_dir } => {
            let group = current_group(processor)?;
            let path = GroupBackup::from_group(&group, Utc::now())
                .and_then(|backup| backup.export_to_dir(&out_dir))
                .map_err(backup_error)?;
            Ok(format!("{}\n", tabsplit_i18n::exported_to(path.display())))
        }
    }
}

fn current_group(processor: &GroupProcessor<'_>) -> CliResult<Group> {
    processor
        .current_group()
        .map_err(store_error)?
        .ok_or_else(|| store_error(StoreError::NoCurrentGroup))
}

fn summary_of_current(processor: &GroupProcessor<'_>, currency: &str) -> CliResult<String> {
    let group = current_group(processor)?;
    Ok(SummaryPresenter::render(&group.summary(), currency))
}

fn render_settlement(processor: &GroupProcessor<'_>, group: &Group, currency: &str) -> String {
    let mut output = SummaryPresenter::render(&group.summary(), currency);
    let _ = writeln!(&mut output, "\n{}:", tabsplit_i18n::SETTLEMENT);
    output.push_str(&SettlementPresenter::render(&processor.settle(group), currency));
    output
}
