// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Reading components out of a stream of content lines.
//!
//! Every component is read by the same loop: nested `BEGIN` lines recurse
//! into a child component or are skipped, known property names go to the
//! component's collector, anything else is kept as an unknown property, and
//! the matching `END` line hands the collected fields to the collector to
//! check and assemble.

use std::io::{self, Read, Write};

use crate::error::{DecodeError, RuleViolation, ValidationError};
use crate::keyword::{KW_BEGIN, KW_END};
use crate::property::{Property, PropertyKind, PropertyValue, UnknownProperty};
use crate::syntax::{ContentLine, Phraser};
use crate::tz::DecodeOptions;

/// A component that can be read from and written to content lines.
pub(crate) trait Component: Sized {
    /// Name on the `BEGIN` and `END` lines.
    const NAME: &'static str;

    /// Accumulates the content of one component while it is read.
    type Collector: Collector<Output = Self>;

    /// Write the properties and child components, without `BEGIN`/`END`.
    fn write_body<W: Write>(&self, w: &mut W) -> io::Result<()>;

    /// Validate the properties, rules and child components.
    fn validate_body(&self) -> Result<(), ValidationError>;

    /// Write the whole component.
    fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        ContentLine::new(KW_BEGIN, Self::NAME).write_to(w)?;
        self.write_body(w)?;
        ContentLine::new(KW_END, Self::NAME).write_to(w)
    }
}

/// Cross-field rules of a component, checked when it is decoded and
/// validated.
pub(crate) trait Rules {
    fn check_rules(&self) -> Result<(), RuleViolation> {
        Ok(())
    }
}

/// Accumulates properties and children between `BEGIN` and `END`.
pub(crate) trait Collector: Default {
    type Output;

    /// Decode a known property, giving the line back if the component does
    /// not define it.
    fn property(
        &mut self,
        kind: PropertyKind,
        line: ContentLine,
        options: &DecodeOptions,
    ) -> Result<Option<ContentLine>, DecodeError>;

    /// Read a child component whose `BEGIN` line was just consumed. Returns
    /// `false` if the component does not take children of that name.
    fn nested<R: Read>(
        &mut self,
        name: &str,
        reader: &mut ComponentReader<'_, R>,
    ) -> Result<bool, DecodeError>;

    /// Keep a property this crate does not interpret.
    fn unknown(&mut self, property: UnknownProperty);

    /// Check required properties and rules, and build the component.
    fn finish(self, options: &DecodeOptions) -> Result<Self::Output, DecodeError>;
}

/// A child component slot: a component or a choice between components.
pub(crate) trait Nested: Sized {
    /// Read the child if `name` is one this slot takes.
    fn read_nested<R: Read>(
        name: &str,
        reader: &mut ComponentReader<'_, R>,
    ) -> Result<Option<Self>, DecodeError>;

    fn write_nested<W: Write>(&self, w: &mut W) -> io::Result<()>;

    fn validate_nested(&self) -> Result<(), ValidationError>;
}

/// Implement [`Nested`] for a type that is itself a [`Component`].
macro_rules! nested_component {
    ($ty:ty) => {
        impl $crate::semantic::analysis::Nested for $ty {
            fn read_nested<R: ::std::io::Read>(
                name: &str,
                reader: &mut $crate::semantic::analysis::ComponentReader<'_, R>,
            ) -> Result<Option<Self>, $crate::error::DecodeError> {
                if name == <Self as $crate::semantic::analysis::Component>::NAME {
                    reader.read::<Self>().map(Some)
                } else {
                    Ok(None)
                }
            }

            fn write_nested<W: ::std::io::Write>(&self, w: &mut W) -> ::std::io::Result<()> {
                $crate::semantic::analysis::Component::write(self, w)
            }

            fn validate_nested(&self) -> Result<(), $crate::error::ValidationError> {
                $crate::semantic::analysis::Component::validate_body(self).map_err(|err| {
                    $crate::error::ValidationError::Component {
                        name: <Self as $crate::semantic::analysis::Component>::NAME,
                        source: Box::new(err),
                    }
                })
            }
        }
    };
}

/// Pulls content lines and reads components out of them.
pub(crate) struct ComponentReader<'a, R> {
    phraser: Phraser<R>,
    options: &'a DecodeOptions,
}

impl<'a, R: Read> ComponentReader<'a, R> {
    pub fn new(phraser: Phraser<R>, options: &'a DecodeOptions) -> Self {
        Self { phraser, options }
    }

    /// The next content line; running out of input is an error, since every
    /// caller is inside an open component.
    pub fn next_line(&mut self) -> Result<ContentLine, DecodeError> {
        self.phraser.next_line()?.ok_or(DecodeError::UnexpectedEof)
    }

    /// Read a component whose `BEGIN` line was just consumed, up to and
    /// including its `END` line.
    ///
    /// # Errors
    ///
    /// Any error is wrapped with the component name.
    pub fn read<C: Component>(&mut self) -> Result<C, DecodeError> {
        self.read_body::<C>().map_err(|err| DecodeError::Component {
            name: C::NAME,
            source: Box::new(err),
        })
    }

    fn read_body<C: Component>(&mut self) -> Result<C, DecodeError> {
        tracing::trace!(component = C::NAME, "begin");
        let mut collector = C::Collector::default();
        loop {
            let line = self.next_line()?;
            if line.name == KW_BEGIN {
                let name = line.value.to_ascii_uppercase();
                if !collector.nested(&name, self)? {
                    tracing::debug!(component = C::NAME, nested = %name, "skipping unknown component");
                    self.skip(name)?;
                }
            } else if line.name == KW_END {
                if !line.value.eq_ignore_ascii_case(C::NAME) {
                    return Err(DecodeError::InvalidEnd {
                        expected: C::NAME.to_string(),
                        found: line.value,
                    });
                }
                break;
            } else if let Ok(kind) = line.name.parse::<PropertyKind>() {
                if let Some(line) = collector.property(kind, line, self.options)? {
                    tracing::debug!(
                        component = C::NAME,
                        property = %line.name,
                        "keeping property the component does not define"
                    );
                    collector.unknown(UnknownProperty::from(line));
                }
            } else {
                tracing::debug!(component = C::NAME, property = %line.name, "keeping unknown property");
                collector.unknown(UnknownProperty::from(line));
            }
        }
        tracing::trace!(component = C::NAME, "end");
        collector.finish(self.options)
    }

    /// Consume a component nobody reads, including any components nested
    /// in it, up to its matching `END` line.
    fn skip(&mut self, name: String) -> Result<(), DecodeError> {
        let mut open = vec![name];
        while let Some(top) = open.last() {
            let line = self.next_line()?;
            if line.name == KW_BEGIN {
                open.push(line.value.to_ascii_uppercase());
            } else if line.name == KW_END {
                if !line.value.eq_ignore_ascii_case(top) {
                    return Err(DecodeError::InvalidEnd {
                        expected: top.clone(),
                        found: line.value,
                    });
                }
                open.pop();
            }
        }
        Ok(())
    }
}

fn in_property(kind: PropertyKind, err: DecodeError) -> DecodeError {
    DecodeError::Property {
        name: kind.name(),
        source: Box::new(err),
    }
}

/// Decode an at-most-once property into its slot.
pub(crate) fn decode_once<V: PropertyValue>(
    slot: &mut Option<Property<V>>,
    kind: PropertyKind,
    line: ContentLine,
    options: &DecodeOptions,
) -> Result<(), DecodeError> {
    if slot.is_some() {
        return Err(DecodeError::DuplicateProperty(kind));
    }
    let property = Property::decode(kind, line, options).map_err(|err| in_property(kind, err))?;
    *slot = Some(property);
    Ok(())
}

/// Decode a repeatable property and append it.
pub(crate) fn decode_many<V: PropertyValue>(
    list: &mut Vec<Property<V>>,
    kind: PropertyKind,
    line: ContentLine,
    options: &DecodeOptions,
) -> Result<(), DecodeError> {
    let property = Property::decode(kind, line, options).map_err(|err| in_property(kind, err))?;
    list.push(property);
    Ok(())
}

pub(crate) fn validate_property<V: PropertyValue>(
    property: &Property<V>,
    kind: PropertyKind,
) -> Result<(), ValidationError> {
    property
        .validate(kind)
        .map_err(|err| ValidationError::Property {
            name: kind.name().to_string(),
            source: Box::new(err),
        })
}

pub(crate) fn validate_unknown(property: &UnknownProperty) -> Result<(), ValidationError> {
    property
        .validate()
        .map_err(|err| ValidationError::Property {
            name: property.name.clone(),
            source: Box::new(err),
        })
}
