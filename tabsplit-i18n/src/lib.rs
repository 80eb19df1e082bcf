#[cfg(all(feature = "es", feature = "en"))]
compile_error!("Cannot enable both 'es' and 'en' features at the same time");

#[cfg(feature = "es")]
pub mod strings {
    pub const GROUP: &str = "Grupo actual";
    pub const TOTAL_SPENT: &str = "Gasto total";
    pub const PARTICIPANTS: &str = "Participantes";
    pub const EXPENSES: &str = "Gastos";
    pub const SPENDING_PER_MEMBER: &str = "Gasto por miembro";
    pub const SETTLEMENT: &str = "Quién debe a quién";
    pub const NO_PARTICIPANTS: &str = "No hay participantes";
    pub const NO_PARTICIPANTS_IN_GROUP: &str = "No hay participantes en el grupo";
    pub const NO_EXPENSES: &str = "No hay gastos registrados";
    pub const GROUP_DELETED: &str = "Grupo eliminado correctamente";
    pub const ALL_SETTLED: &str = "¡Todos están en paz! No hay deudas pendientes.";
    pub const EXPORTED_AT: &str = "Fecha de exportación";
    pub const UNKNOWN_DATE: &str = "Desconocida";
    pub const REPLACES_CURRENT_GROUP: &str =
        "Esta acción reemplazará todos los datos actuales del grupo.";
    pub const EMPTY_GROUP_NAME: &str = "Por favor, ingresa un nombre para el grupo";
    pub const EMPTY_PARTICIPANT_NAME: &str = "Por favor, ingresa un nombre válido";
    pub const EMPTY_DESCRIPTION: &str = "Por favor, ingresa una descripción";
    pub const NON_POSITIVE_AMOUNT: &str =
        "Por favor, ingresa una cantidad válida mayor que cero";
    pub const SUB_CENT_AMOUNT: &str = "La cantidad no puede tener más de dos decimales";
    pub const NEED_PARTICIPANTS: &str = "Añade participantes antes de registrar gastos";
    pub const NO_CURRENT_GROUP: &str = "Primero debes crear o entrar a un grupo";
    pub const EMPTY_GROUP_EXPORT: &str =
        "El grupo está vacío. Añade participantes o gastos antes de exportar.";
    pub const MISSING_GROUP_NAME: &str = "El archivo no contiene un nombre de grupo válido";
    pub const INVALID_BACKUP: &str =
        "Asegúrate de que es un archivo de respaldo válido de ExpenseSplitter.";
    pub const STORAGE_FAILED: &str = "No se pudieron leer o guardar los datos";
}

#[cfg(not(feature = "es"))]
pub mod strings {
    pub const GROUP: &str = "Current group";
    pub const TOTAL_SPENT: &str = "Total spent";
    pub const PARTICIPANTS: &str = "Participants";
    pub const EXPENSES: &str = "Expenses";
    pub const SPENDING_PER_MEMBER: &str = "Spending per member";
    pub const SETTLEMENT: &str = "Who owes whom";
    pub const NO_PARTICIPANTS: &str = "No participants";
    pub const NO_PARTICIPANTS_IN_GROUP: &str = "There are no participants in the group";
    pub const NO_EXPENSES: &str = "No expenses recorded";
    pub const GROUP_DELETED: &str = "Group deleted";
    pub const ALL_SETTLED: &str = "Everyone is settled! No pending debts.";
    pub const EXPORTED_AT: &str = "Exported at";
    pub const UNKNOWN_DATE: &str = "Unknown";
    pub const REPLACES_CURRENT_GROUP: &str = "This replaces all data of the current group.";
    pub const EMPTY_GROUP_NAME: &str = "Please enter a name for the group";
    pub const EMPTY_PARTICIPANT_NAME: &str = "Please enter a valid name";
    pub const EMPTY_DESCRIPTION: &str = "Please enter a description";
    pub const NON_POSITIVE_AMOUNT: &str = "Please enter a valid amount greater than zero";
    pub const SUB_CENT_AMOUNT: &str = "Amounts cannot have more than two decimal places";
    pub const NEED_PARTICIPANTS: &str = "Add participants before recording expenses";
    pub const NO_CURRENT_GROUP: &str = "Create or enter a group first";
    pub const EMPTY_GROUP_EXPORT: &str =
        "The group is empty. Add participants or expenses before exporting.";
    pub const MISSING_GROUP_NAME: &str = "The file does not contain a valid group name";
    pub const INVALID_BACKUP: &str = "Make sure the file is a valid ExpenseSplitter backup.";
    pub const STORAGE_FAILED: &str = "Could not read or save the data";
}

pub use strings::*;

#[cfg(feature = "es")]
pub fn paid(payer: impl std::fmt::Display, amount: impl std::fmt::Display) -> String {
    format!("{payer} pagó {amount}")
}

#[cfg(feature = "es")]
pub fn exported_to(path: impl std::fmt::Display) -> String {
    format!("Datos exportados correctamente: {path}")
}

#[cfg(feature = "es")]
pub fn owes(from: impl std::fmt::Display, to: impl std::fmt::Display) -> String {
    format!("{from} debe a {to}")
}

#[cfg(feature = "es")]
pub fn duplicate_participant(name: impl std::fmt::Display) -> String {
    format!("El participante '{name}' ya existe")
}

#[cfg(feature = "es")]
pub fn unknown_participant(name: impl std::fmt::Display) -> String {
    format!("El participante '{name}' no existe")
}

#[cfg(feature = "es")]
pub fn unknown_payer(name: impl std::fmt::Display) -> String {
    format!("'{name}' no es participante del grupo; selecciona quién pagó")
}

#[cfg(feature = "es")]
pub fn expense_not_found(index: usize) -> String {
    format!("El gasto #{index} no existe")
}

#[cfg(feature = "es")]
pub fn amount_too_large(max: impl std::fmt::Display) -> String {
    format!("La cantidad no puede superar {max}")
}

#[cfg(feature = "es")]
pub fn invalid_expense_number(raw: impl std::fmt::Display) -> String {
    format!("'{raw}' no es un número de gasto válido")
}

#[cfg(feature = "es")]
pub fn import_failed(detail: impl std::fmt::Display) -> String {
    format!("Error al importar el archivo: {detail}")
}

#[cfg(not(feature = "es"))]
pub fn paid(payer: impl std::fmt::Display, amount: impl std::fmt::Display) -> String {
    format!("{payer} paid {amount}")
}

#[cfg(not(feature = "es"))]
pub fn exported_to(path: impl std::fmt::Display) -> String {
    format!("Data exported to {path}")
}

#[cfg(not(feature = "es"))]
pub fn owes(from: impl std::fmt::Display, to: impl std::fmt::Display) -> String {
    format!("{from} owes {to}")
}

#[cfg(not(feature = "es"))]
pub fn duplicate_participant(name: impl std::fmt::Display) -> String {
    format!("Participant '{name}' already exists")
}

#[cfg(not(feature = "es"))]
pub fn unknown_participant(name: impl std::fmt::Display) -> String {
    format!("Participant '{name}' does not exist")
}

#[cfg(not(feature = "es"))]
pub fn unknown_payer(name: impl std::fmt::Display) -> String {
    format!("'{name}' is not in the group; select who paid")
}

#[cfg(not(feature = "es"))]
pub fn expense_not_found(index: usize) -> String {
    format!("Expense #{index} does not exist")
}

#[cfg(not(feature = "es"))]
pub fn amount_too_large(max: impl std::fmt::Display) -> String {
    format!("Amounts cannot exceed {max}")
}

#[cfg(not(feature = "es"))]
pub fn invalid_expense_number(raw: impl std::fmt::Display) -> String {
    format!("'{raw}' is not a valid expense number")
}

#[cfg(not(feature = "es"))]
pub fn import_failed(detail: impl std::fmt::Display) -> String {
    format!("Failed to import the file: {detail}")
}
