// Integration tests for the declarator translator

use spiral::{translate, ParseError};

#[test]
fn test_plain_variable() {
    assert_eq!(translate("int x").expect("translation failed"), "x is int");
}

#[test]
fn test_pointer() {
    assert_eq!(
        translate("int *x").expect("translation failed"),
        "x is pointer to int"
    );
}

#[test]
fn test_array() {
    assert_eq!(
        translate("int x[]").expect("translation failed"),
        "x is array of int"
    );
}

#[test]
fn test_array_binds_tighter_than_pointer() {
    assert_eq!(
        translate("int *x[]").expect("translation failed"),
        "x is array of pointer to int"
    );
}

#[test]
fn test_grouping_reorders_pointer_before_array() {
    assert_eq!(
        translate("int (*x)[]").expect("translation failed"),
        "x is pointer to array of int"
    );
}

#[test]
fn test_function_pointer_with_qualified_pointers() {
    assert_eq!(
        translate("char* const*(*next)()").expect("translation failed"),
        "next is pointer to function returning pointer to read only pointer to char"
    );
}

#[test]
fn test_function() {
    assert_eq!(
        translate("double f()").expect("translation failed"),
        "f is function returning double"
    );
}

#[test]
fn test_pointer_to_function() {
    assert_eq!(
        translate("void (*handler)()").expect("translation failed"),
        "handler is pointer to function returning void"
    );
}

#[test]
fn test_repeated_calls_are_identical() {
    let first = translate("char* const*(*next)()").expect("translation failed");
    let second = translate("char* const*(*next)()").expect("translation failed");
    assert_eq!(first, second);
}

#[test]
fn test_no_identifier_is_an_error() {
    let err = translate("unsigned int").expect_err("should be malformed");
    let ParseError::MalformedDeclarator { message } = err;
    assert!(message.contains("identifier"), "unexpected message: {}", message);
}

#[test]
fn test_empty_input_is_an_error() {
    assert!(translate("").is_err());
    assert!(translate("   ").is_err());
}

#[test]
fn test_unmatched_delimiters_are_errors() {
    for input in ["int x[", "int x]", "int x(", "int x)", "int (x", "int ((x)"] {
        assert!(
            translate(input).is_err(),
            "expected malformed declarator for {:?}",
            input
        );
    }
}

#[test]
fn test_errors_never_produce_partial_output() {
    // The contract is Result, not a truncated sentence; a failed call
    // returns only the typed error.
    match translate("int x[") {
        Err(ParseError::MalformedDeclarator { message }) => {
            assert!(!message.is_empty());
        }
        Ok(sentence) => panic!("expected error, got {:?}", sentence),
    }
}
