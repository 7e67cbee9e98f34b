/// Convert an operation name into PascalCase.
///
/// Words are split on any non-alphanumeric character, on a lowercase letter
/// or digit followed by an uppercase letter (`getUser` -> `get`, `User`), and
/// on the last capital of an acronym that starts a new word (`IDName` -> `ID`,
/// `Name`). Each word keeps its first character upper-cased and the rest
/// lower-cased. A word after the first that begins with a digit is joined
/// with `_` so the digit never merges into the previous word.
///
/// ```
/// use libgraphql_swr::to_pascal_case;
/// assert_eq!(to_pascal_case("getUser"), "GetUser");
/// assert_eq!(to_pascal_case("get_user_by_ID"), "GetUserById");
/// assert_eq!(to_pascal_case("item_2"), "Item_2");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for (index, word) in split_words(s).iter().enumerate() {
        let mut chars = word.chars();
        let Some(first) = chars.next() else {
            continue;
        };
        if index > 0 && first.is_ascii_digit() {
            result.push('_');
        }
        result.push(first.to_ascii_uppercase());
        result.extend(chars.map(|c| c.to_ascii_lowercase()));
    }
    result
}

fn split_words(s: &str) -> Vec<String> {
    let mut words = vec![];
    let mut current = String::new();
    let mut prev: Option<char> = None;
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if !c.is_ascii_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }

        if c.is_ascii_uppercase()
            && let Some(p) = prev {
            let next_is_lower = chars.peek().is_some_and(|n| n.is_ascii_lowercase());
            let starts_word =
                p.is_ascii_lowercase()
                || p.is_ascii_digit()
                || (p.is_ascii_uppercase() && next_is_lower);
            if starts_word && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
        prev = Some(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}
