/// # mask secret
///
/// convert string from "something" to "so*****ng"
///
/// ### Arguments
///
/// * `secret`: original string
/// * `visible`: how many chars stay readable, split between head and tail.
///   if the secret is not longer than `visible`, every char is hidden.
pub fn mask_secret(secret: &str, visible: usize) -> String {
    let char_count = secret.chars().count();
    if char_count <= visible {
        return "*".repeat(char_count);
    }

    let head = visible / 2;
    let tail = visible - head;

    secret
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if i < head || i >= char_count - tail {
                c
            } else {
                '*'
            }
        })
        .collect()
}
