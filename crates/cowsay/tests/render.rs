use cowsay::{
    extract, test_support::SAMPLE_COW, BubbleKind, CowError, CowLibrary, Cowsay, Mood,
    Placeholder, TemplateResource,
};
use pretty_assertions::assert_eq;

const LONG: &str =
    "Moo moo moo moo moo moo moo moo moo moo moo moo moo moo moo moo moo moo moo";

const COW_TAIL: &str = concat!(
    "            (__)\\       )\\/\\\n",
    "                ||----w |\n",
    "                ||     ||\n",
);

fn sample() -> TemplateResource {
    TemplateResource::new("default", SAMPLE_COW)
}

fn say(cowsay: Cowsay, message: &str) -> String {
    cowsay.render(&sample(), message).unwrap()
}

fn face_lines(connector: &str, eyes: &str) -> String {
    format!("        {connector}   ^__^\n         {connector}  ({eyes})\\_______\n")
}

#[test]
fn cowsay_hello() {
    let expected = format!(
        " _______ \n< Hello >\n ------- \n{}{COW_TAIL}",
        face_lines("\\", "oo")
    );
    assert_eq!(say(Cowsay::new(), "Hello"), expected);
}

#[test]
fn cowthink_hello() {
    let expected = format!(
        " _______ \n( Hello )\n ------- \n{}{COW_TAIL}",
        face_lines("o", "oo")
    );
    assert_eq!(say(Cowsay::think(), "Hello"), expected);
}

#[test]
fn cowsay_moods() {
    let expected_eyes = [
        ('b', "=="),
        ('d', "xx"),
        ('g', "$$"),
        ('p', "@@"),
        ('s', "**"),
        ('t', "--"),
        ('w', "OO"),
        ('y', ".."),
    ];
    for (letter, eyes) in expected_eyes {
        let out = say(Cowsay::new().with_mood(Some(letter)), "Hello");
        assert!(
            out.contains(&format!("({eyes})")),
            "-{letter} should draw {eyes}:\n{out}"
        );
    }
    let dead = say(Cowsay::new().with_mood(Some(Mood::Dead.letter())), "Hello");
    assert!(dead.contains("             U  ||----w |\n"));
}

#[test]
fn greedy_eyes_equal_dollar_override() {
    assert_eq!(
        say(Cowsay::new().with_mood(Some('g')), "Hello"),
        say(Cowsay::new().with_eyes("$$"), "Hello")
    );
}

#[test]
fn backslash_eyes_are_literal() {
    let out = say(Cowsay::new().with_eyes("\\\\"), "Hello");
    assert!(out.contains("(\\\\)\\_______"));
}

#[test]
fn tongue_and_eyes_override() {
    let out = say(Cowsay::new().with_tongue("V").with_eyes("QQ"), "Hello");
    assert!(out.contains("(QQ)"));
    assert!(out.contains("             V ||----w |\n"));
}

#[test]
fn cowsay_long_line_wraps_at_forty() {
    let expected = format!(
        concat!(
            " _________________________________________ \n",
            "/ Moo moo moo moo moo moo moo moo moo moo \\\n",
            "\\ moo moo moo moo moo moo moo moo moo     /\n",
            " ----------------------------------------- \n",
            "{}{}"
        ),
        face_lines("\\", "oo"),
        COW_TAIL
    );
    assert_eq!(say(Cowsay::new(), LONG), expected);
}

#[test]
fn cowthink_long_line() {
    let out = say(Cowsay::think(), LONG);
    let rows: Vec<&str> = out.lines().take(4).collect();
    assert_eq!(
        rows,
        vec![
            " _________________________________________ ",
            "( Moo moo moo moo moo moo moo moo moo moo )",
            "( moo moo moo moo moo moo moo moo moo     )",
            " ----------------------------------------- ",
        ]
    );
}

#[test]
fn multiline_input() {
    let out = say(
        Cowsay::new(),
        "This is a test text.\nTo test long lines in cowsay.\nMoo moo moo.",
    );
    let rows: Vec<&str> = out.lines().take(5).collect();
    assert_eq!(
        rows,
        vec![
            " _______________________________ ",
            "/ This is a test text.          \\",
            "| To test long lines in cowsay. |",
            "\\ Moo moo moo.                  /",
            " ------------------------------- ",
        ]
    );
}

#[test]
fn no_wrap_keeps_explicit_lines() {
    let message = format!("{LONG}\nshort");
    let out = say(Cowsay::new().with_wrap(0), &message);
    let rows: Vec<&str> = out.lines().collect();
    assert_eq!(rows[1], format!("/ {LONG} \\"));
    assert_eq!(rows[2], format!("\\ short{} /", " ".repeat(LONG.len() - 5)));
    assert_eq!(rows[3], format!(" {} ", "-".repeat(LONG.len() + 2)));
}

#[test]
fn wrap_narrower_than_word_keeps_word() {
    let out = say(Cowsay::new().with_wrap(2), "Hello");
    assert!(out.starts_with(" _______ \n< Hello >\n ------- \n"));
}

#[test]
fn empty_message_is_empty_output() {
    assert_eq!(say(Cowsay::new(), ""), "");
}

#[test]
fn malformed_template_has_no_output() {
    let broken = TemplateResource::new("broken", "$the_cow = <<EOC;\n   ^__^\n");
    let result = Cowsay::new().render(&broken, "Hello");
    match result {
        Err(CowError::UnterminatedBlock { name, .. }) => assert_eq!(name, "broken"),
        other => panic!("expected UnterminatedBlock, got {other:?}"),
    }
}

#[test]
fn substitution_does_not_rescan() {
    let art = extract("default", SAMPLE_COW).unwrap();
    assert_eq!(
        art.placeholders().into_iter().collect::<Vec<_>>(),
        vec![Placeholder::Eyes, Placeholder::Tongue, Placeholder::Thoughts]
    );
    let face = cowsay::Face::default().with_eyes("$e").with_tongue("$t");
    let rendered = art.render(&face, BubbleKind::Speech.connector());
    let rescanned = extract("rendered", &format!("$the_cow = <<'EOC';\n{rendered}EOC\n")).unwrap();
    assert!(rescanned.placeholders().is_empty());
}

#[test]
fn every_bundled_cow_renders() {
    let library = CowLibrary::new();
    let names = library.list();
    for name in &names {
        let resource = library.load(name).unwrap();
        let out = Cowsay::new().render(&resource, "Hello").unwrap();
        assert!(out.starts_with(" _______ \n< Hello >\n"), "{name}:\n{out}");
        assert!(!out.contains("$thoughts"), "{name}:\n{out}");
    }
}

#[test]
fn sheep_uses_braced_eyes_and_escaped_at() {
    let resource = CowLibrary::new().load("sheep").unwrap();
    let out = Cowsay::new().with_mood(Some('y')).render(&resource, "Baa").unwrap();
    assert!(out.contains("U..U\\.'@@@@@@`."), "{out}");
}

#[test]
fn eyes_cow_uses_header_alias() {
    let resource = CowLibrary::new().load("eyes").unwrap();
    let out = Cowsay::new().with_eyes("^^").render(&resource, "Boo").unwrap();
    assert!(out.contains("(^^)(^^)"), "{out}");
    assert!(out.contains("UWWW$$$"), "{out}");
}
