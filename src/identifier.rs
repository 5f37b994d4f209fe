//! Gateway sender id normalization
//!
//! The gateway addresses chats as `<number>[:<device>]@<suffix>`, while the
//! banking backend and the send API expect the bare number.

/// Strip the routing suffix and device qualifier from a gateway sender id.
///
/// Ids without an `@` are returned unchanged.
pub fn normalize_sender(sender: &str) -> String {
    let Some((number_part, _suffix)) = sender.split_once('@') else {
        return sender.to_string();
    };

    let number = number_part
        .split_once(':')
        .map_or(number_part, |(number, _device)| number);

    number.replace(' ', "")
}
