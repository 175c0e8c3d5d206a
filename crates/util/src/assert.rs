/// Asserts that every element occurs in `content`, each one after the end of the previous match.
///
/// `assert_contains_inorder!(stdout, ["R1 smt", "R2 smt"]);`
#[macro_export]
macro_rules! assert_contains_inorder {
    ($content: expr, [$($element:expr),+ $(,)?]) => {
        {
            let mut _remainder: &str = &$content;
            let mut _index = 0;
            $(
                let element: &str = $element;
                match _remainder.split_once(element) {
                    Some((_, remainder)) => _remainder = remainder,
                    None => panic!("unmatched ordered element\nindex: {}\nexpected:\n{}\nremaining content:\n{}\n", _index, element, _remainder),
                }
                _index += 1;
            )+
        }
    };
}
