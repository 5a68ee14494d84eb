macro_rules! clause {
    ($($term:expr),* $(,)?) => {
        $crate::dnf::Clause::from_iter([$($crate::dnf::Term::from($term)),*])
    };
}

macro_rules! dnf {
    ($([$($term:expr),* $(,)?]),* $(,)?) => {
        $crate::dnf::Dnf::from_iter([$($crate::test_utils::clause!($($term),*)),*])
    };
}

pub(crate) use clause;
pub(crate) use dnf;
