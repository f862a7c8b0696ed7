//! Reference maps.
//!
//! Each constant is a list of rows. Expected outcomes with the default
//! configuration are noted on each map; outcomes with crossings enabled
//! are noted where they differ.

// ── Solvable ────────────────────────────────────────────────────────

/// Letters `ACB`, path `@---A---+|C|+---+|+-B-x`.
pub const BASIC: &[&str] = &[
    "  @---A---+",
    "          |",
    "  x-B-+   C",
    "      |   |",
    "      +---+",
];

/// A path that would have to pass over other segments. With the
/// default axis rule it fails with `InvalidPosition` at (4, 3) moving
/// down, after `@|A+---B--+|+--C-+|`. With crossings enabled: letters
/// `ABCD`, path `@|A+---B--+|+--C-+|-||+---D--+|x`.
pub const STRAIGHT_THROUGH: &[&str] = &[
    "  @",
    "  | +-C--+",
    "  A |    |",
    "  +---B--+",
    "    |      x",
    "    |      |",
    "    +---D--+",
];

/// Letters revisited at the same position are credited once.
/// Letters `GOONIES`, path `@-G-O-+|+-+|O||+-O-N-+|I|+-+|+-I-+|ES|x`.
pub const GOONIES: &[&str] = &[
    "     +-O-N-+",
    "     |     |",
    "     |   +-I-+",
    " @-G-O-+ | | |",
    "     | | +-+ E",
    "     +-+     S",
    "             |",
    "             x",
];

/// Tightly packed turns. Letters `BLAH`, path `@B+++B|+-L-+A+++A-+Hx`.
pub const COMPACT: &[&str] = &[
    " +-L-+",
    " |  +A-+",
    "@B+ ++ H",
    " ++    x",
];

/// Characters after the first end reached are never walked.
/// Letters `AB`, path `@-A--+|+-B--x`.
pub const AFTER_END: &[&str] = &[
    "  @-A--+",
    "       |",
    "       +-B--x-C--D",
];

/// Closes a loop onto the end. Letters empty, path `@-+|+-+x`.
pub const LOOP: &[&str] = &["@-+", "x |", "+-+"];

/// A turn whose straight continuation is a `|` lying across the walk.
/// Letters empty, path `@-+|+-x`. With crossings enabled the walk goes
/// straight over the `|` instead: path `@-+|-x`.
pub const CROSSING_AT_TURN: &[&str] = &["@-+|-x", "  |   ", "  +-x "];

// ── Failing ─────────────────────────────────────────────────────────

/// `NoStart`.
pub const MISSING_START: &[&str] = &[
    "     -A---+",
    "          |",
    "  x-B-+   C",
    "      |   |",
    "      +---+",
];

/// `NoEnd`.
pub const MISSING_END: &[&str] = &[
    "   @--A---+",
    "          |",
    "    B-+   C",
    "      |   |",
    "      +---+",
];

/// `MultipleStarts { count: 2 }`.
pub const MULTIPLE_STARTS: &[&str] = &[
    "   @--A-@-+",
    "          |",
    "  x-B-+   C",
    "      |   |",
    "      +---+",
];

/// Two ends, one reachable only through a fork. Passes validation,
/// fails while walking with `InvalidPosition` after `@--A---+|B`.
pub const FORK: &[&str] = &[
    "        x-B",
    "          |",
    "   @--A---+",
    "          |",
    "     x+   C",
    "      |   |",
    "      +---+",
];

/// A gap in the path. `InvalidPosition`.
pub const BROKEN_PATH: &[&str] = &[
    "   @--A-+",
    "        |",
    "         ",
    "        B-x",
];

/// A turn with nowhere to go. `NoValidTurn`.
pub const DEAD_END_TURN: &[&str] = &["@-+  x"];

/// Nothing leads away from the start. `NoValidPathFromStart`.
pub const ISOLATED_START: &[&str] = &["@   x"];

/// A lowercase letter is not a path character. `InvalidCharacter`.
pub const LOWERCASE_LETTER: &[&str] = &["@-a-x"];

/// A `|` across a horizontal run. `InvalidPosition` at (2, 0) moving
/// right; solvable only with crossings enabled.
pub const BAR_ACROSS_RUN: &[&str] = &["@-|-x"];

/// Every solvable reference map, with expected letters and path.
pub const SOLVABLE: &[(&[&str], &str, &str)] = &[
    (BASIC, "ACB", "@---A---+|C|+---+|+-B-x"),
    (GOONIES, "GOONIES", "@-G-O-+|+-+|O||+-O-N-+|I|+-+|+-I-+|ES|x"),
    (COMPACT, "BLAH", "@B+++B|+-L-+A+++A-+Hx"),
    (AFTER_END, "AB", "@-A--+|+-B--x"),
    (LOOP, "", "@-+|+-+x"),
    (CROSSING_AT_TURN, "", "@-+|+-x"),
];

/// Maps whose outcome changes when crossings are enabled, with the
/// letters and path walked under crossings.
pub const WITH_CROSSINGS: &[(&[&str], &str, &str)] = &[
    (STRAIGHT_THROUGH, "ABCD", "@|A+---B--+|+--C-+|-||+---D--+|x"),
    (CROSSING_AT_TURN, "", "@-+|-x"),
    (BAR_ACROSS_RUN, "", "@-|-x"),
];
