//! Global constants for the waypoint engine

pub mod defaults {
    use std::time::Duration;

    /// Minimum interval between two accepted navigation calls
    pub const THROTTLE: Duration = Duration::from_millis(50);

    /// Quiet period after the last edit before the cache is rebuilt
    pub const DEBOUNCE: Duration = Duration::from_millis(150);

    /// Rows longer than this many bytes are truncated for scanning
    pub const MAX_SCAN_COLS: usize = 1000;

    /// Extra rows scanned above and below the visible range
    pub const VIEWPORT_PADDING: usize = 0;

    /// Deepest syntax node the tree walker descends into
    pub const MAX_TREE_DEPTH: usize = 256;

    pub const OPENING_BRACKETS: &[char] = &['(', '[', '{'];
    pub const CLOSING_BRACKETS: &[char] = &[')', ']', '}'];
    pub const QUOTES: &[char] = &['"', '\'', '`'];
    pub const OPERATORS: &[char] = &[
        '=', '+', '-', '*', '/', '%', '<', '>', '!', '&', '|', '^', ':', ',', ';', '.', '?',
    ];
    pub const WORD_OPERATORS: &[&str] = &["and", "or", "not", "in", "is"];

    pub const TARGET_TYPES: &[&str] = &[
        "identifier",
        "field_identifier",
        "property_identifier",
        "type_identifier",
        "primitive_type",
        "string",
        "string_literal",
        "raw_string_literal",
        "char_literal",
        "integer",
        "integer_literal",
        "float",
        "float_literal",
        "number",
        "number_literal",
        "boolean_literal",
        "true",
        "false",
        "none",
        "null",
    ];

    pub const CONTAINER_TYPES: &[&str] = &[
        "parameters",
        "formal_parameters",
        "parameter_list",
        "arguments",
        "argument_list",
        "type_arguments",
        "type_parameters",
        "block",
        "compound_statement",
        "statement_block",
        "field_declaration_list",
        "declaration_list",
        "array",
        "array_expression",
        "list",
        "tuple",
        "tuple_expression",
        "dictionary",
        "object",
    ];
}

pub mod syntax {
    /// Substrings that mark a node kind as modifier-like
    pub const MODIFIER_SUBSTRINGS: &[&str] = &["specifier", "qualifier", "modifier", "keyword"];

    /// Node kinds that are modifier-like without carrying one of the substrings
    pub const MODIFIER_KINDS: &[&str] = &[
        "async",
        "const",
        "static",
        "extern",
        "unsafe",
        "mut",
        "pub",
        "inline",
        "virtual",
        "override",
        "final",
        "abstract",
        "decorator",
        "attribute_item",
    ];

    /// Kind substrings that make a node a declaration for the first-name rule
    pub const DECLARATION_SUBSTRINGS: &[&str] = &["declaration", "definition"];

    /// Kind substrings that get an after-open and an at-close waypoint
    pub const GROUPING_SUBSTRINGS: &[&str] = &["parenthesized", "condition"];

    /// Kind substrings that get an at-end waypoint
    pub const BOUNDARY_SUBSTRINGS: &[&str] = &["statement", "expression"];
}

pub mod errors {
    // Error Codes
    pub const GENERIC_ERROR: &str = "GENERIC_ERROR";
    pub const INVALID_POSITION: &str = "INVALID_POSITION";
    pub const UNKNOWN_SETTING: &str = "UNKNOWN_SETTING";
    pub const AMBIGUOUS_SETTING: &str = "AMBIGUOUS_SETTING";
    pub const SETTING_PARSE_ERROR: &str = "SETTING_PARSE_ERROR";
    pub const SETTING_VALIDATION_ERROR: &str = "SETTING_VALIDATION_ERROR";
    pub const MISSING_VALUE: &str = "MISSING_VALUE";
}
