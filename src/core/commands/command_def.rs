// src/core/commands/command_def.rs

//! The `define_commands!` macro, which generates the closed command table: the
//! `Command` enum holding parsed commands, the `CommandType` enum naming every
//! registered tag, and the dispatch glue between them.

macro_rules! define_commands {
    ( $( ($variant:ident, $ty:ident, $module:ident) ),* $(,)? ) => {
        /// A fully parsed command, ready to execute.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Command {
            $( $variant($module::$ty), )*
        }

        /// Every registered command tag.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum CommandType {
            $( $variant, )*
        }

        impl CommandType {
            /// All registered types in declaration order.
            pub const ALL: &'static [CommandType] = &[ $( CommandType::$variant, )* ];

            /// Resolves a wire tag. Matching is case-sensitive.
            pub fn lookup(name: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|t| t.name() == name)
            }

            pub fn name(self) -> &'static str {
                match self {
                    $( CommandType::$variant => <$module::$ty as CommandSpec>::NAME, )*
                }
            }

            pub fn arity(self) -> Arity {
                match self {
                    $( CommandType::$variant => <$module::$ty as CommandSpec>::ARITY, )*
                }
            }

            pub fn flags(self) -> CommandFlags {
                match self {
                    $( CommandType::$variant => <$module::$ty as CommandSpec>::FLAGS, )*
                }
            }

            /// Parses `args` into the command registered for this type.
            pub fn parse(self, args: &[String]) -> Result<Command, CuiError> {
                match self {
                    $(
                        CommandType::$variant => {
                            <$module::$ty as ParseCommand>::parse(args).map(Command::$variant)
                        }
                    )*
                }
            }
        }

        impl Command {
            pub fn command_type(&self) -> CommandType {
                match self {
                    $( Command::$variant(_) => CommandType::$variant, )*
                }
            }

            pub fn name(&self) -> &'static str {
                self.command_type().name()
            }

            pub fn flags(&self) -> CommandFlags {
                self.command_type().flags()
            }

            pub fn execute(
                &self,
                ctx: &mut ExecutionContext<'_>,
            ) -> Result<Option<String>, CuiError> {
                match self {
                    $( Command::$variant(cmd) => cmd.execute(ctx), )*
                }
            }
        }
    };
}
