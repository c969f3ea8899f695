/// Query string of the subscription handshake, e.g.
/// `?hub.mode=subscribe&hub.verify_token=...&hub.challenge=1158201444`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VerifyParams {
    pub mode: Option<String>,
    pub verify_token: Option<String>,
    pub challenge: Option<String>,
}

impl VerifyParams {
    /// Builds the params from decoded query pairs. The first value of a
    /// repeated key wins; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "hub.mode" => &mut params.mode,
                "hub.verify_token" => &mut params.verify_token,
                "hub.challenge" => &mut params.challenge,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}
