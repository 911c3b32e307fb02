use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::Serialize;

/// Lines of code and lines of comments, summed over everything extracted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LocInfo {
    pub lines_of_code: usize,
    pub lines_of_comments: usize,
}

impl LocInfo {
    pub fn new(lines_of_code: usize, lines_of_comments: usize) -> Self {
        Self {
            lines_of_code,
            lines_of_comments,
        }
    }
}

impl Add for LocInfo {
    type Output = LocInfo;

    fn add(self, rhs: LocInfo) -> LocInfo {
        LocInfo::new(
            self.lines_of_code + rhs.lines_of_code,
            self.lines_of_comments + rhs.lines_of_comments,
        )
    }
}

impl AddAssign for LocInfo {
    fn add_assign(&mut self, rhs: LocInfo) {
        *self = *self + rhs;
    }
}

impl Sum for LocInfo {
    fn sum<I: Iterator<Item = LocInfo>>(iter: I) -> LocInfo {
        iter.fold(LocInfo::default(), Add::add)
    }
}
