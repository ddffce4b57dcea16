use profilecard_core::UserId;

/// User intents, as emitted by the screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavCommand {
    SelectUser(UserId),
    GoBack,
}
