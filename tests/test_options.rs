use bnfmatch::Usage;

include!("macros.rs");

#[test]
fn test_short_option() {
    let patterns = ["prog -x <word>"];
    let valids: [&[&str]; 2] = [
        &["prog", "-x", "hello"],
        &["prog", "-x", "hello", "extra"],
    ];
    let invalids: [&[&str]; 3] = [
        &["prog", "-y", "hello"],
        &["gorp", "-x", "hello"],
        &["prog"],
    ];
    run_match_tests!(&patterns, &valids, &invalids);
}

#[test]
fn test_several_literals() {
    let patterns = ["prog get <key> from <store>"];
    let valids: [&[&str]; 1] = [&["prog", "get", "k1", "from", "s1"]];
    let invalids: [&[&str]; 2] = [
        &["prog", "put", "k1", "from", "s1"],
        &["gorp", "get", "k1", "from", "s1"],
    ];
    run_match_tests!(&patterns, &valids, &invalids);
}

#[test]
fn test_option_literal_is_a_byte_prefix() {
    // The comparison checks the argument's bytes against the pattern at the
    // cursor; the unmatched tail of the word is skipped, not compared.
    let patterns = ["prog -xyz"];
    let valids: [&[&str]; 2] = [&["prog", "-x"], &["prog", "-xyz"]];
    let invalids: [&[&str]; 1] = [&["prog", "-z"]];
    run_match_tests!(&patterns, &valids, &invalids);
}

#[test]
fn test_empty_argument_consumes_a_word() {
    // A zero-length argument is a trivial byte prefix of anything.
    let patterns = ["prog -x"];
    let valids: [&[&str]; 1] = [&["prog", ""]];
    let invalids: [&[&str]; 0] = [];
    run_match_tests!(&patterns, &valids, &invalids);
}

#[test]
fn test_whitespace_varieties_separate_tokens() {
    let patterns = ["prog\t-x\n<word>", "prog \t -x \r\n <word>"];
    let valids: [&[&str]; 1] = [&["prog", "-x", "hello"]];
    let invalids: [&[&str]; 1] = [&["prog", "-y", "hello"]];
    run_match_tests!(&patterns, &valids, &invalids);
}
