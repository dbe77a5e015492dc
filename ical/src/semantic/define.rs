// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Define a component from its property table.
///
/// Usage:
///
/// ```ignore
/// define_component! {
///     /// Docs
///     pub struct VFoo(KW_VFOO, FooCollector) {
///         required { uid: Text => Uid }
///         optional { summary: Text => Summary }
///         repeated { comments: Text => Comment }
///         children { alarms: VAlarm }
///     }
/// }
/// ```
///
/// Fields are written in the order listed, required first, then optional,
/// repeated, unknown properties and children. The type must implement
/// `Rules`.
macro_rules! define_component {
    (
        $(#[$meta:meta])*
        pub struct $Name:ident ($kw:expr, $Collector:ident) {
            required {
                $( $(#[$rmeta:meta])* $rf:ident: $rty:ty => $rkind:ident ),* $(,)?
            }
            optional {
                $( $(#[$ometa:meta])* $of:ident: $oty:ty => $okind:ident ),* $(,)?
            }
            repeated {
                $( $(#[$pmeta:meta])* $pf:ident: $pty:ty => $pkind:ident ),* $(,)?
            }
            children {
                $( $(#[$cmeta:meta])* $cf:ident: $cty:ty ),* $(,)?
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $Name {
            $( $(#[$rmeta])* pub $rf: $crate::property::Property<$rty>, )*
            $( $(#[$ometa])* pub $of: Option<$crate::property::Property<$oty>>, )*
            $( $(#[$pmeta])* pub $pf: Vec<$crate::property::Property<$pty>>, )*
            $( $(#[$cmeta])* pub $cf: Vec<$cty>, )*
            /// Properties this crate does not interpret, in input order
            pub unknown: Vec<$crate::property::UnknownProperty>,
        }

        impl $Name {
            /// Create a component from its required properties.
            #[must_use]
            pub fn new($( $rf: impl Into<$crate::property::Property<$rty>> ),*) -> Self {
                Self {
                    $( $rf: $rf.into(), )*
                    $( $of: None, )*
                    $( $pf: Vec::new(), )*
                    $( $cf: Vec::new(), )*
                    unknown: Vec::new(),
                }
            }

            /// Check the component and everything in it can be encoded.
            ///
            /// # Errors
            ///
            /// Returns the first problem found, with the path leading to it.
            pub fn validate(&self) -> Result<(), $crate::error::ValidationError> {
                $crate::semantic::analysis::Nested::validate_nested(self)
            }
        }

        impl $crate::semantic::analysis::Component for $Name {
            const NAME: &'static str = $kw;
            type Collector = $Collector;

            fn write_body<W: ::std::io::Write>(&self, w: &mut W) -> ::std::io::Result<()> {
                $( self.$rf.encode($crate::property::PropertyKind::$rkind).write_to(w)?; )*
                $(
                    if let Some(property) = &self.$of {
                        property.encode($crate::property::PropertyKind::$okind).write_to(w)?;
                    }
                )*
                $(
                    for property in &self.$pf {
                        property.encode($crate::property::PropertyKind::$pkind).write_to(w)?;
                    }
                )*
                for property in &self.unknown {
                    property.encode().write_to(w)?;
                }
                $(
                    for child in &self.$cf {
                        $crate::semantic::analysis::Nested::write_nested(child, w)?;
                    }
                )*
                Ok(())
            }

            fn validate_body(&self) -> Result<(), $crate::error::ValidationError> {
                use $crate::semantic::analysis::validate_property;

                $( validate_property(&self.$rf, $crate::property::PropertyKind::$rkind)?; )*
                $(
                    if let Some(property) = &self.$of {
                        validate_property(property, $crate::property::PropertyKind::$okind)?;
                    }
                )*
                $(
                    for property in &self.$pf {
                        validate_property(property, $crate::property::PropertyKind::$pkind)?;
                    }
                )*
                for property in &self.unknown {
                    $crate::semantic::analysis::validate_unknown(property)?;
                }
                $crate::semantic::analysis::Rules::check_rules(self)?;
                $(
                    for child in &self.$cf {
                        $crate::semantic::analysis::Nested::validate_nested(child)?;
                    }
                )*
                Ok(())
            }
        }

        nested_component!($Name);

        #[derive(Debug, Default)]
        pub(crate) struct $Collector {
            $( $rf: Option<$crate::property::Property<$rty>>, )*
            $( $of: Option<$crate::property::Property<$oty>>, )*
            $( $pf: Vec<$crate::property::Property<$pty>>, )*
            $( $cf: Vec<$cty>, )*
            unknown: Vec<$crate::property::UnknownProperty>,
        }

        impl $crate::semantic::analysis::Collector for $Collector {
            type Output = $Name;

            fn property(
                &mut self,
                kind: $crate::property::PropertyKind,
                line: $crate::syntax::ContentLine,
                options: &$crate::tz::DecodeOptions,
            ) -> Result<Option<$crate::syntax::ContentLine>, $crate::error::DecodeError> {
                #[allow(unused_imports)]
                use $crate::semantic::analysis::{decode_many, decode_once};

                match kind {
                    $( $crate::property::PropertyKind::$rkind => {
                        decode_once(&mut self.$rf, kind, line, options)?;
                    } )*
                    $( $crate::property::PropertyKind::$okind => {
                        decode_once(&mut self.$of, kind, line, options)?;
                    } )*
                    $( $crate::property::PropertyKind::$pkind => {
                        decode_many(&mut self.$pf, kind, line, options)?;
                    } )*
                    _ => return Ok(Some(line)),
                }
                Ok(None)
            }

            #[allow(unused_variables)]
            fn nested<R: ::std::io::Read>(
                &mut self,
                name: &str,
                reader: &mut $crate::semantic::analysis::ComponentReader<'_, R>,
            ) -> Result<bool, $crate::error::DecodeError> {
                $(
                    if let Some(child) =
                        <$cty as $crate::semantic::analysis::Nested>::read_nested(name, reader)?
                    {
                        self.$cf.push(child);
                        return Ok(true);
                    }
                )*
                Ok(false)
            }

            fn unknown(&mut self, property: $crate::property::UnknownProperty) {
                self.unknown.push(property);
            }

            fn finish(
                self,
                _: &$crate::tz::DecodeOptions,
            ) -> Result<$Name, $crate::error::DecodeError> {
                let component = $Name {
                    $(
                        $rf: self.$rf.ok_or($crate::error::DecodeError::MissingProperty(
                            $crate::property::PropertyKind::$rkind,
                        ))?,
                    )*
                    $( $of: self.$of, )*
                    $( $pf: self.$pf, )*
                    $( $cf: self.$cf, )*
                    unknown: self.unknown,
                };
                $crate::semantic::analysis::Rules::check_rules(&component)?;
                Ok(component)
            }
        }
    };
}
