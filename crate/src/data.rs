// The bundled English data. Rules are listed from the most general to the
// most specific. Each one is pushed to the front of its rule list as it is
// loaded, so entries further down take priority over entries above them.
//
// Patterns are literal strings, so each one is anchored to the whole word
// and matched case-insensitively. Capturing the stem keeps the casing of
// the whole word available when a rule fires.

pub(crate) const IRREGULARS: &[(&str, &str)] = &[
    ("child", "children"),
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("tooth", "teeth"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("mouse", "mice"),
    ("louse", "lice"),
    ("ox", "oxen"),
    ("die", "dice"),
    ("genus", "genera"),
    ("passerby", "passersby"),
];

pub(crate) const PLURAL_RULES: &[(&str, &str)] = &[
    ("(.+)", "$1s"),
    ("(.*(?:ss|sh|ch|x|z|[^aeiou]us|gas|alias|atlas|lens|canvas))", "$1es"),
    ("(.*[^aeiou])y", "$1ies"),
    ("(.*(?:her|potat|tomat|ech|torped|vet))o", "$1oes"),
    ("(.*(?:[aeo]l|ar|ea|oa|thie))f", "$1ves"),
    ("(.*(?:kni|wi)|li)fe", "$1ves"),
    (
        "(.*(?:wo|fire|police|sales|chair|gentle|sports|spokes|business|fisher|crafts|country|noble|work|sea|snow))man",
        "$1men",
    ),
    (
        "(ax|.*(?:cris|test|analys|diagnos|thes|synops|ellips|oas|parenthes|hypothes))is",
        "$1es",
    ),
    ("(.*(?:alumn|cact|foc|fung|nucle|radi|stimul|syllab))us", "$1i"),
    ("(.*(?:criteri|phenomen|automat))on", "$1a"),
    (
        "(.*(?:bacteri|curricul|dat|errat|ov|strat|symposi|memorand|millenni))um",
        "$1a",
    ),
    ("(.*(?:matr|append))ix", "$1ices"),
    ("(.*(?:vert|ind|cod))ex", "$1ices"),
    ("(.*eau)", "$1x"),
    ("((?:tit|dor)?m|l)ouse", "$1ice"),
    ("(.*quiz)", "$1zes"),
];

pub(crate) const SINGULAR_RULES: &[(&str, &str)] = &[
    ("(.*[^siu])s", "$1"),
    ("(.*(?:menu|emu|gnu|guru|tutu|haiku|tiramisu))s", "$1"),
    ("(.*(?:ski|kiwi|taxi|alibi|bikini|wiki|safari|emoji|sushi))s", "$1"),
    ("(.*(?:ss|sh|ch|x|z))es", "$1"),
    ("(.*(?:bus|gas|alias|status|virus|atlas|lens|canvas))es", "$1"),
    ("(.*[^aeiou])ies", "$1y"),
    ("((?:ti|pi|li|di)|.*(?:movi|cooki|zombi|calori|rooki|selfi))es", "$1e"),
    ("(.*(?:her|potat|tomat|ech|torped|vet))oes", "$1o"),
    ("(.*(?:[aeo]l|ar|ea|oa|thie))ves", "$1f"),
    ("(.*(?:kni|wi)|li)ves", "$1fe"),
    (
        "(.*(?:wo|fire|police|sales|chair|gentle|sports|spokes|business|fisher|crafts|country|noble|work|sea|snow))men",
        "$1man",
    ),
    (
        "(ax|.*(?:cris|test|analys|diagnos|thes|synops|ellips|oas|parenthes|hypothes))es",
        "$1is",
    ),
    ("(.*(?:alumn|cact|foc|fung|nucle|radi|stimul|syllab))i", "$1us"),
    ("(.*(?:criteri|phenomen|automat))a", "$1on"),
    (
        "(.*(?:bacteri|curricul|dat|errat|ov|strat|symposi|memorand|millenni))a",
        "$1um",
    ),
    ("(.*(?:matr|append))ices", "$1ix"),
    ("(.*(?:vert|ind|cod))ices", "$1ex"),
    ("(.*eau)x", "$1"),
    ("((?:tit|dor)?m|l)ice", "$1ouse"),
    ("(.*quiz)zes", "$1"),
];

pub(crate) const UNCOUNTABLES: &[&str] = &[
    "advice",
    "aircraft",
    "bison",
    "equipment",
    "fish",
    "furniture",
    "homework",
    "information",
    "knowledge",
    "luggage",
    "moose",
    "money",
    "music",
    "news",
    "police",
    "research",
    "rice",
    "salmon",
    "series",
    "sheep",
    "software",
    "species",
    "traffic",
    "trout",
];

pub(crate) const UNCOUNTABLE_PATTERNS: &[&str] = &[
    ".*(?:fish|sheep|deer)",
    ".*[^aeiou]ese",
    ".*pox",
    ".*measles",
    "pok[eé]mon",
];
