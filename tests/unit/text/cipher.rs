use super::*;

#[test]
fn rot13_rotates_both_cases() {
    assert_eq!(rot13("Hello"), "Uryyb");
    assert_eq!(rot13("uryyb"), "hello");
}

#[test]
fn rot13_is_an_involution() {
    let phrase = "Flowers are everywhere!";
    assert_eq!(rot13(&rot13(phrase)), phrase);
}

#[test]
fn non_letters_pass_through() {
    assert_eq!(rot13("1234 -_!"), "1234 -_!");
}
