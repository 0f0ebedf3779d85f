use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("illegal map")]
    IllegalSize,

    #[error("map is too large (rows and columns must be less than {max_dimension})")]
    SizeTooLarge { max_dimension: usize },

    #[error("position ({row}, {col}) is outside the {rows} x {cols} map")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}
