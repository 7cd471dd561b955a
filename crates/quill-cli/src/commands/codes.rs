use serde::Serialize;

use quill_core::ErrorCode;

#[derive(Serialize)]
struct CodeEntry {
    code: ErrorCode,
    style: bool,
    message: &'static str,
    fix: &'static str,
}

/// Run `quill codes`: print the error taxonomy.
pub fn run(json: bool) -> i32 {
    if json {
        let entries: Vec<CodeEntry> = ErrorCode::ALL
            .iter()
            .map(|&code| CodeEntry {
                code,
                style: code.is_style(),
                message: code.general_message(),
                fix: code.fix_hint(),
            })
            .collect();
        match serde_json::to_string_pretty(&entries) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("quill codes: failed to serialize: {}", e);
                return 2;
            }
        }
    } else {
        print!("{}", render_table());
    }
    0
}

fn render_table() -> String {
    let mut out = String::new();
    for code in ErrorCode::ALL {
        let kind = if code.is_style() { "style" } else { "check" };
        out.push_str(&format!("{}  {:<5}  {}\n", code, kind, code.general_message()));
    }
    out
}
