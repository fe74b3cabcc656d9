//! Teaching text shown around the demonstration

pub const SEPARATOR: &str =
    "---------------------------------------------------------------------------------------------";

pub const WELCOME: &[&str] = &[
    "",
    "Welcome to the Binary Reflected Gray Code Visualizer!",
    "",
    "This program will briefly describe the purpose and applications of Binary",
    "Reflected Gray Code (BRGC), then provide a demonstration of generating such codes.",
    "",
];

pub const OVERVIEW: &[&str] = &[
    "",
    "Binary Reflected Gray Code (BRGC) is a special sequence of binary numbers",
    "where each successive number differs from the previous one by exactly one bit.",
    "",
];

pub const APPLICATIONS: &[&str] = &[
    "",
    "Applications:",
    "",
    "- Rotary and Digital Encoders: ",
    "      Minimizes reading errors by changing only one bit at a time as positions change.",
    "",
    "- Analog-to-Digital Conversion (ADC): ",
    "      Reduces glitches when converting continuous signals to digital.",
    "",
    "- Finite State Machines (FSMs):",
    "      Lowers switching errors and power use in sequential circuits.",
    "",
    "- Error Detection in Communication:",
    "      Makes single-bit errors easier to detect and manage.",
    "",
];

pub const PROCEDURE: &[&str] = &[
    "",
    "In this demonstration we will be using a recursive implementation of BRGC generation.",
    "",
    "The procedure is as follows:",
    "    1. Start with a single bit Gray code (base case): [\"0\", \"1\"].",
    "    2. For each subsequent bit:",
    "        - Reflect the current list (reverse it).",
    "        - Prefix the original list with 0 and the reflected list with 1.",
    "    3. Repeat until you reach the desired number of bits (recursive step).",
    "",
];

/// `['00', '01', '11', '10']`
pub fn format_code_list(codes: &[String]) -> String {
    let quoted: Vec<String> = codes.iter().map(|c| format!("'{}'", c)).collect();
    format!("[{}]", quoted.join(", "))
}
