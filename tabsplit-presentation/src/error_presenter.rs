use crate::{DEFAULT_CURRENCY, format_money};
use tabsplit_application::{GroupError, MAX_EXPENSE_AMOUNT, StoreError};
use tabsplit_i18n as i18n;
use tabsplit_infrastructure::BackupError;

pub fn format_group_error(error: &GroupError) -> String {
    match error {
        GroupError::EmptyGroupName => i18n::EMPTY_GROUP_NAME.to_owned(),
        GroupError::EmptyParticipantName => i18n::EMPTY_PARTICIPANT_NAME.to_owned(),
        GroupError::DuplicateParticipant(name) => i18n::duplicate_participant(name),
        GroupError::UnknownParticipant(name) => i18n::unknown_participant(name),
        GroupError::EmptyDescription => i18n::EMPTY_DESCRIPTION.to_owned(),
        GroupError::NonPositiveAmount(_) => i18n::NON_POSITIVE_AMOUNT.to_owned(),
        GroupError::AmountTooLarge(_) => {
            i18n::amount_too_large(format_money(MAX_EXPENSE_AMOUNT, DEFAULT_CURRENCY))
        }
        GroupError::SubCentAmount(_) => i18n::SUB_CENT_AMOUNT.to_owned(),
        GroupError::UnknownPayer(name) => i18n::unknown_payer(name),
        GroupError::NoParticipants => i18n::NEED_PARTICIPANTS.to_owned(),
        GroupError::ExpenseIndexOutOfRange { index, .. } => i18n::expense_not_found(index + 1),
    }
}

pub fn format_store_error(error: &StoreError) -> String {
    match error {
        StoreError::NoCurrentGroup => i18n::NO_CURRENT_GROUP.to_owned(),
        StoreError::InvalidGroup(err) => format_group_error(err),
        StoreError::Io(err) => format!("{}: {err}", i18n::STORAGE_FAILED),
        StoreError::Malformed(detail) => format!("{}: {detail}", i18n::STORAGE_FAILED),
    }
}

pub fn format_backup_error(error: &BackupError) -> String {
    match error {
        BackupError::EmptyGroup => i18n::EMPTY_GROUP_EXPORT.to_owned(),
        BackupError::MissingGroupName => i18n::import_failed(i18n::MISSING_GROUP_NAME),
        BackupError::InvalidGroup(err) => i18n::import_failed(format_group_error(err)),
        BackupError::Json(err) => format!(
            "{}\n{}",
            i18n::import_failed(err),
            i18n::INVALID_BACKUP
        ),
        BackupError::Io(err) => format!("{}: {err}", i18n::STORAGE_FAILED),
    }
}
