use needledrop::lastfm::sign::{api_signature, signed_params};

#[test]
fn test_api_signature_is_deterministic() {
    let params = [
        ("method", "auth.getMobileSession"),
        ("api_key", "key123"),
        ("username", "listener"),
        ("password", "hunter2"),
    ];

    let first = api_signature(&params, "secret");
    let second = api_signature(&params, "secret");
    assert_eq!(first, second);
}

#[test]
fn test_api_signature_is_lowercase_hex_md5() {
    let sig = api_signature(&[("method", "auth.getToken"), ("api_key", "k")], "s");

    // 128-bit digest as lowercase hex
    assert_eq!(sig.len(), 32);
    assert!(
        sig.chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    );
}

#[test]
fn test_api_signature_ignores_insertion_order() {
    let forward = [("artist", "Can"), ("method", "track.scrobble"), ("track", "Vitamin C")];
    let reversed = [("track", "Vitamin C"), ("method", "track.scrobble"), ("artist", "Can")];

    assert_eq!(api_signature(&forward, "s"), api_signature(&reversed, "s"));
}

#[test]
fn test_api_signature_changes_with_any_input() {
    let base = [("api_key", "key"), ("method", "track.scrobble")];
    let sig = api_signature(&base, "secret");

    // Changing a single parameter value changes the digest
    let other_value = [("api_key", "key2"), ("method", "track.scrobble")];
    assert_ne!(sig, api_signature(&other_value, "secret"));

    // Changing the shared secret changes the digest
    assert_ne!(sig, api_signature(&base, "secret2"));

    // Adding a parameter changes the digest
    let extra = [
        ("api_key", "key"),
        ("method", "track.scrobble"),
        ("sk", "session"),
    ];
    assert_ne!(sig, api_signature(&extra, "secret"));
}

#[test]
fn test_signed_params_extends_the_signed_set() {
    let params = [("api_key", "k"), ("method", "auth.getToken")];
    let sig = api_signature(&params, "s");

    let form = signed_params(&params, &sig);

    // The transmitted set is exactly the signed set plus api_sig and format
    assert_eq!(&form[..params.len()], &params);
    assert_eq!(form[params.len()], ("api_sig", sig.as_str()));
    assert_eq!(*form.last().unwrap(), ("format", "json"));
    assert_eq!(form.len(), params.len() + 2);
}

#[test]
fn test_api_signature_concatenation_has_no_delimiters() {
    // "ab" + "cd" must not collide with "a" + "bcd" on values alone;
    // names participate in the canonical string, so these differ
    let one = [("a", "bcd"), ("x", "y")];
    let two = [("ab", "cd"), ("x", "y")];
    assert_ne!(api_signature(&one, "s"), api_signature(&two, "s"));
}
