use thiserror::Error;

/// Client-side form checks. Messages are the ones shown in the alert dialog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("El nombre de la juntada es obligatorio")]
    MissingName,

    #[error("La descripción es obligatoria")]
    MissingDescription,

    #[error("El lugar es obligatorio")]
    MissingPlace,

    #[error("El monto debe ser un número mayor a 0")]
    InvalidAmount,

    #[error("La descripción del gasto es obligatoria")]
    MissingExpenseDescription,

    #[error("Debes seleccionar un grupo con usuarios")]
    MissingGroup,

    #[error("La fecha de la juntada no puede ser en el pasado")]
    DateInPast,

    #[error("Debe seleccionar una moneda")]
    MissingCurrency,

    /// Group name or description left blank.
    #[error("Por favor completa todos los campos")]
    IncompleteGroup,
}

#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("Encryption failed")]
    EncryptionFailed,

    #[error("Decryption failed: invalid ciphertext or wrong key")]
    DecryptionFailed,

    #[error("Invalid key length")]
    InvalidKeyLength,
}
