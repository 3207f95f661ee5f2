/// Tuple up the `i`-th elements of every sequence.
///
/// The output is as long as the longest input; positions past the end of a
/// shorter sequence hold `None`. Zero sequences produce an empty result.
///
/// ```
/// use underbar::zip;
///
/// let letters = ["a", "b", "c", "d"];
/// let numbers = ["1", "2", "3"];
/// let zipped = zip(&[&letters[..], &numbers[..]]);
/// assert_eq!(zipped[3], vec![Some("d"), None]);
/// ```
pub fn zip<T, S>(seqs: &[S]) -> Vec<Vec<Option<T>>>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let longest = seqs.iter().map(|seq| seq.as_ref().len()).max().unwrap_or(0);
    (0..longest)
        .map(|index| {
            seqs.iter()
                .map(|seq| seq.as_ref().get(index).cloned())
                .collect()
        })
        .collect()
}
