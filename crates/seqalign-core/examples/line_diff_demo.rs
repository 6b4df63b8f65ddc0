//! Line Diff Demonstration
//!
//! This example walks through a comparison session over lines of text.
//!
//! Key concepts illustrated:
//! 1. Splitting text into lines
//! 2. Opcodes and grouped hunks
//! 3. The three similarity ratios
//! 4. Memoisation and invalidation

use seqalign_core::{
    render_hunks, string_as_lines, Artifact, DiffOptions, JunkPolicy, SequenceMatcher,
};

const BASE: &str = "fn main() {\n    let x = 1;\n    let y = 2;\n\n    println!(\"{}\", x + y);\n}\n";
const TARGET: &str = "fn main() {\n    let x = 1;\n    let y = 3;\n\n    println!(\"{}\", x * y);\n}\n";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== seqalign Line Diff Demo ===\n");

    // ===== Part 1: Opcodes =====
    println!("## Part 1: Opcodes\n");

    let base = string_as_lines(BASE);
    let target = string_as_lines(TARGET);
    let opts = DiffOptions {
        context: 1,
        junk: JunkPolicy::BlankLines,
    };
    let sm = opts.session(base.clone(), target.clone());

    for op in sm.opcodes().iter() {
        println!(
            "{:>7} a[{}..{}] b[{}..{}]",
            op.tag.as_str(),
            op.base_start,
            op.base_end,
            op.target_start,
            op.target_end
        );
    }

    // ===== Part 2: Hunks =====
    println!("\n## Part 2: Hunks (context = {})\n", opts.context);
    let groups = sm.grouped_opcodes(opts.context);
    print!("{}", render_hunks(&base, &target, &groups));

    // ===== Part 3: Ratios =====
    println!("\n## Part 3: Ratios\n");
    println!("ratio            = {:.3}", sm.ratio());
    println!("quick_ratio      = {:.3}", sm.quick_ratio());
    println!("real_quick_ratio = {:.3}", sm.real_quick_ratio());

    // ===== Part 4: Invalidation =====
    println!("\n## Part 4: Invalidation\n");
    let mut sm = sm;
    println!("blocks before:  {:?}", sm.cache_state(Artifact::MatchingBlocks));
    sm.set_base(target.clone());
    println!("blocks after set_base: {:?}", sm.cache_state(Artifact::MatchingBlocks));
    println!("index after set_base:  {:?}", sm.cache_state(Artifact::Index));
    println!("ratio now = {:.3}", sm.ratio());

    // ===== Part 5: Builder errors =====
    println!("\n## Part 5: Builder errors\n");
    if let Err(err) = SequenceMatcher::<&str>::builder().base(base).build() {
        println!("build without target: {}", err);
    }

    Ok(())
}
