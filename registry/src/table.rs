//! The static builtin consumer table.

/// Whether invoking a builtin's consume function needs the parser context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextRequirement {
    /// The consume function never takes the context.
    Never,
    /// The consume function always takes the context.
    Always,
    /// The context supplies the parsing mode, so it is only needed when
    /// no explicit mode parameter was given.
    UnlessModeGiven,
}

/// Whether a parameter category must be supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    /// Falls back to `default` when no token selects the category. A
    /// category can be optional with no default at all.
    Optional { default: Option<&'static str> },
    Required,
}

/// One parameter category of a builtin: a finite token set, each token
/// mapping to the value the generator passes through.
#[derive(Debug, Clone, Copy)]
pub struct ParameterCategory {
    pub name: &'static str,
    pub tokens: &'static [(&'static str, &'static str)],
    pub kind: CategoryKind,
}

impl ParameterCategory {
    pub fn token_value(&self, token: &str) -> Option<&'static str> {
        self.tokens
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, v)| *v)
    }

    pub fn token_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tokens.iter().map(|(t, _)| *t)
    }
}

/// One builtin value consumer.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinDef {
    pub name: &'static str,
    pub consume_function: &'static str,
    pub categories: &'static [ParameterCategory],
    pub context: ContextRequirement,
}

const MODE: ParameterCategory = ParameterCategory {
    name: "mode",
    tokens: &[("svg", "SVGAttributeMode"), ("strict", "HTMLStandardMode")],
    kind: CategoryKind::Optional { default: None },
};

const UNITLESS: ParameterCategory = ParameterCategory {
    name: "unitless",
    tokens: &[("unitless-allowed", "UnitlessQuirk::Allow")],
    kind: CategoryKind::Optional {
        default: Some("UnitlessQuirk::Forbid"),
    },
};

const UNITLESS_ZERO: ParameterCategory = ParameterCategory {
    name: "unitless-zero",
    tokens: &[("unitless-zero-allowed", "UnitlessZeroQuirk::Allow")],
    kind: CategoryKind::Optional {
        default: Some("UnitlessZeroQuirk::Forbid"),
    },
};

const VALUE_RANGE: ParameterCategory = ParameterCategory {
    name: "value-range",
    tokens: &[("[0,inf]", "ValueRange::NonNegative")],
    kind: CategoryKind::Optional {
        default: Some("ValueRange::All"),
    },
};

const INTEGER_VALUE_RANGE: ParameterCategory = ParameterCategory {
    name: "value-range",
    tokens: &[
        ("[0,inf]", "IntegerValueRange::NonNegative"),
        ("[1,inf]", "IntegerValueRange::Positive"),
    ],
    kind: CategoryKind::Optional {
        default: Some("IntegerValueRange::All"),
    },
};

const QUIRKY_COLORS: ParameterCategory = ParameterCategory {
    name: "quirky-colors",
    tokens: &[("accept-quirky-colors-in-quirks-mode", "true")],
    kind: CategoryKind::Optional {
        default: Some("false"),
    },
};

/// The builtin consumers, in reference-name order of first use.
pub const BUILTINS: &[BuiltinDef] = &[
    BuiltinDef {
        name: "angle",
        consume_function: "consumeAngle",
        categories: &[MODE, UNITLESS, UNITLESS_ZERO],
        context: ContextRequirement::Always,
    },
    BuiltinDef {
        name: "length",
        consume_function: "consumeLength",
        categories: &[VALUE_RANGE, MODE, UNITLESS],
        context: ContextRequirement::UnlessModeGiven,
    },
    BuiltinDef {
        name: "length-percentage",
        consume_function: "consumeLengthOrPercent",
        categories: &[VALUE_RANGE, MODE, UNITLESS],
        context: ContextRequirement::UnlessModeGiven,
    },
    BuiltinDef {
        name: "time",
        consume_function: "consumeTime",
        categories: &[VALUE_RANGE, MODE, UNITLESS],
        context: ContextRequirement::Always,
    },
    BuiltinDef {
        name: "integer",
        consume_function: "consumeInteger",
        categories: &[INTEGER_VALUE_RANGE],
        context: ContextRequirement::Never,
    },
    BuiltinDef {
        name: "number",
        consume_function: "consumeNumber",
        categories: &[VALUE_RANGE],
        context: ContextRequirement::Never,
    },
    BuiltinDef {
        name: "percentage",
        consume_function: "consumePercent",
        categories: &[VALUE_RANGE],
        context: ContextRequirement::Never,
    },
    BuiltinDef {
        name: "position",
        consume_function: "consumePosition",
        categories: &[UNITLESS],
        context: ContextRequirement::Always,
    },
    BuiltinDef {
        name: "color",
        consume_function: "consumeColor",
        categories: &[QUIRKY_COLORS],
        context: ContextRequirement::Always,
    },
    BuiltinDef {
        name: "resolution",
        consume_function: "consumeResolution",
        categories: &[],
        context: ContextRequirement::Never,
    },
    BuiltinDef {
        name: "string",
        consume_function: "consumeString",
        categories: &[],
        context: ContextRequirement::Never,
    },
    BuiltinDef {
        name: "custom-ident",
        consume_function: "consumeCustomIdent",
        categories: &[],
        context: ContextRequirement::Never,
    },
    BuiltinDef {
        name: "dashed-ident",
        consume_function: "consumeDashedIdent",
        categories: &[],
        context: ContextRequirement::Never,
    },
    BuiltinDef {
        name: "url",
        consume_function: "consumeURL",
        categories: &[],
        context: ContextRequirement::Never,
    },
    BuiltinDef {
        name: "declaration-value",
        consume_function: "consumeDeclarationValue",
        categories: &[],
        context: ContextRequirement::Always,
    },
];

/// Look up a builtin definition by reference name.
pub fn lookup(name: &str) -> Option<&'static BuiltinDef> {
    BUILTINS.iter().find(|def| def.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert!(lookup("length").is_some());
        assert!(lookup("color").is_some());
        assert!(lookup("image").is_none());
    }

    #[test]
    fn test_table_is_complete() {
        assert_eq!(BUILTINS.len(), 15);
    }

    #[test]
    fn test_token_value() {
        let length = lookup("length").unwrap();
        let range = &length.categories[0];
        assert_eq!(range.token_value("[0,inf]"), Some("ValueRange::NonNegative"));
        assert_eq!(range.token_value("[1,inf]"), None);
    }
}
