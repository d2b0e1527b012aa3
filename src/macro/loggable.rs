pub use crate::loggable;

#[macro_export]
macro_rules! loggable {
    (
        $enum_name:ident {
            $(
                $(#[doc = $doc:expr])*
                #[error($msg:expr)]
                $variant:ident $({ $($field:ident: $field_type:ty),* $(,)? })? => $level:expr
                $(,)?
            )*
        }
    ) => {
        #[allow(dead_code)]
        #[derive(Debug, Clone, PartialEq, thiserror::Error, serde::Serialize, serde::Deserialize)]
        pub enum $enum_name {
            $(
                $(#[doc = $doc])*
                #[error($msg)]
                $variant $({ $($field: $field_type),* })?,
            )*
        }

        impl $enum_name {
            #[allow(dead_code)]
            pub fn level(&self) -> tracing::Level {
                match self {
                    $(Self::$variant $({ $($field: _),* })? => $level,)*
                }
            }

            #[allow(dead_code)]
            pub fn category(&self) -> &'static str {
                stringify!($enum_name)
            }

            #[allow(dead_code)]
            pub fn log(&self) {
                let level = self.level();
                let category = self.category();
                let message = self.to_string();

                match level {
                    tracing::Level::ERROR => tracing::error!(category, "{}", message),
                    tracing::Level::WARN => tracing::warn!(category, "{}", message),
                    tracing::Level::INFO => tracing::info!(category, "{}", message),
                    tracing::Level::DEBUG => tracing::debug!(category, "{}", message),
                    tracing::Level::TRACE => tracing::trace!(category, "{}", message),
                }
            }

            #[allow(dead_code)]
            pub fn log_with_context<T: std::fmt::Display>(&self, context: T) {
                let level = self.level();
                let category = self.category();
                let message = self.to_string();
                let context = context.to_string();

                match level {
                    tracing::Level::ERROR => tracing::error!(category, message = %message, context = %context),
                    tracing::Level::WARN => tracing::warn!(category, message = %message, context = %context),
                    tracing::Level::INFO => tracing::info!(category, message = %message, context = %context),
                    tracing::Level::DEBUG => tracing::debug!(category, message = %message, context = %context),
                    tracing::Level::TRACE => tracing::trace!(category, message = %message, context = %context),
                }
            }
        }
    };
}
