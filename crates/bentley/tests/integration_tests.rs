use bentley::*;

fn plain_lines(level: Level, message: &str) -> Vec<String> {
  colored::control::set_override(false);
  format_lines(level, message)
}

#[test]
fn test_every_level_gets_its_prefix() {
  let cases = [
    (Level::Verbose, "[verb]  Test message"),
    (Level::Debug, "[debug] Test message"),
    (Level::Info, "[info]  Test message"),
    (Level::Success, "[sccs]  Test message"),
    (Level::Warn, "[warn]  Test message"),
    (Level::Error, "[error] Test message"),
  ];

  for (level, expected) in cases {
    assert_eq!(plain_lines(level, "Test message"), vec![expected.to_string()], "{level}");
  }
}

#[test]
fn test_multiline_messages_prefix_each_line() {
  let lines = plain_lines(Level::Warn, "First line\nSecond line\nThird line");
  assert_eq!(
    lines,
    vec!["[warn]  First line", "[warn]  Second line", "[warn]  Third line"]
  );
}

#[test]
fn test_empty_message_emits_nothing() {
  assert!(plain_lines(Level::Info, "").is_empty());
}
