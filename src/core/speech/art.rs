//! Built-in art: a portrait with a four-line speech bubble.

/// Characters per bubble line in the built-in art.
pub const BUBBLE_WIDTH: usize = 43;

/// Number of bubble lines (and `$` markers) in the built-in art.
pub const BUBBLE_LINES: usize = 4;

pub const PORTRAIT: &str = r#"
                 ___________________________________________
                /                                           \
   ,------._    | $|
  /         :   | $|
 /  ,-__-.  :   | $|
; ,' _   _`-|  /  $|
|/  - ||-   | / _____________________________________________/
|\   /_\    |---
:|         |;
\     o    ;
 \         ;
  `--+---'
"#;
