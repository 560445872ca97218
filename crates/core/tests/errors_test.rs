use std::error::Error;
use bookboard_core::errors::{BoardError, BoardResult};

#[test]
fn test_board_error_display() {
    let malformed = BoardError::Malformed("expected an array".to_string());
    let storage = BoardError::Storage(eyre::eyre!("disk full"));
    let serialization =
        BoardError::Serialization(serde_json::from_str::<u8>("nope").unwrap_err());

    assert_eq!(
        malformed.to_string(),
        "Malformed reservation data: expected an array"
    );
    assert_eq!(storage.to_string(), "Storage error: disk full");
    assert!(serialization.to_string().starts_with("Serialization error:"));
}

#[test]
fn test_serde_error_conversion() {
    let serde_error = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
    let board_error: BoardError = serde_error.into();

    assert!(matches!(board_error, BoardError::Serialization(_)));
    assert!(board_error.source().is_some());
}

#[test]
fn test_eyre_conversion() {
    let board_error: BoardError = eyre::eyre!("read failed").into();

    assert!(matches!(board_error, BoardError::Storage(_)));
    assert!(board_error.to_string().contains("read failed"));
}

#[test]
fn test_board_result() {
    let result: BoardResult<usize> = Ok(3);
    assert_eq!(result.unwrap(), 3);

    let result: BoardResult<usize> = Err(BoardError::Malformed("bad".to_string()));
    assert!(result.is_err());
}
