/// Macro to register games in the registry with automatic initializer generation
///
/// Each module must expose `run_game(Config) -> Result<()>`.
///
/// Usage in games/mod.rs:
/// ```ignore
/// register_games! {
///     snake => {
///         id: "snake",
///         name: "Snake",
///         description: "Eat the food before the monster catches you",
///         author: "Arcade Trio Team"
///     }
/// }
/// ```
#[macro_export]
macro_rules! register_games {
    (
        $(
            $module:ident => {
                id: $id:expr,
                name: $name:expr,
                description: $desc:expr,
                author: $author:expr
            }
        ),* $(,)?
    ) => {
        /// Get all available games with their metadata and initializers
        pub fn get_all_games() -> Vec<GameRegistry> {
            vec![
                $(
                    GameRegistry {
                        info: GameInfo {
                            id: $id,
                            name: $name,
                            description: $desc,
                            author: $author,
                        },
                        initializer: |config| {
                            Box::pin(async move {
                                $crate::games::$module::run_game(config).await
                            })
                        },
                    }
                ),*
            ]
        }

        /// Get a game by ID
        pub fn get_game(id: &str) -> Option<GameRegistry> {
            get_all_games().into_iter().find(|g| g.info.id == id)
        }
    };
}
