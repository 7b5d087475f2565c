use assert_cmd::Command;
use predicates::prelude::*;

const INPUT: &str = "x T utf8\nx res 240 24 40\nx font 1 R\ntHello\n";

#[test]
fn inspect_debug() {
    let mut cmd = Command::cargo_bin("ditrofftools").unwrap();
    cmd.args(["inspect", "-"]);
    let output = cmd.write_stdin(INPUT).output().unwrap();
    assert!(output.status.success());
    let got = String::from_utf8(output.stdout).unwrap();
    let want = r#"Token { op: Typesetter("utf8"), span: 0..8 }
Token { op: Resolution { resolution: 240, horizontal: 24, vertical: 40 }, span: 9..24 }
Token { op: MountFont { position: "1", style: "R" }, span: 25..35 }
Token { op: Text("Hello"), span: 36..42 }
"#;
    similar_asserts::assert_eq!(got: got, want: want);
}

#[test]
fn inspect_json() {
    let mut cmd = Command::cargo_bin("ditrofftools").unwrap();
    cmd.args(["inspect", "--json", "-"]);
    let output = cmd.write_stdin(INPUT).output().unwrap();
    assert!(output.status.success());
    let got = String::from_utf8(output.stdout).unwrap();
    let want = r#"{"op":{"Typesetter":"utf8"},"span":{"start":0,"end":8}}
{"op":{"Resolution":{"resolution":240,"horizontal":24,"vertical":40}},"span":{"start":9,"end":24}}
{"op":{"MountFont":{"position":"1","style":"R"}},"span":{"start":25,"end":35}}
{"op":{"Text":"Hello"},"span":{"start":36,"end":42}}
"#;
    similar_asserts::assert_eq!(got: got, want: want);
}

#[test]
fn inspect_does_not_render() {
    // Motions that can't be rendered are still valid tokens.
    let mut cmd = Command::cargo_bin("ditrofftools").unwrap();
    cmd.args(["inspect", "-"]);
    cmd.write_stdin("V7\n")
        .assert()
        .success()
        .stdout("Token { op: MoveToV(7), span: 0..2 }\n");
}

#[test]
fn inspect_lex_error() {
    let mut cmd = Command::cargo_bin("ditrofftools").unwrap();
    cmd.args(["inspect", "-"]);
    cmd.write_stdin("tHello\nq\n")
        .assert()
        .failure()
        .stdout("Token { op: Text(\"Hello\"), span: 0..6 }\n")
        .stderr(predicate::str::contains("unknown command `q`"));
}
