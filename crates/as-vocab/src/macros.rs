/// Declares a node struct made of property groups.
///
/// Every node also gets its resolved `kind`, its declared `types` and the
/// `extensions` it carried that no group declares. The struct name must also
/// be the name of a [`Kind`](crate::Kind) and a [`Shape`](crate::Shape); that
/// kind is what `Default` builds.
macro_rules! node {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($(#[$fmeta:meta])* $field:ident: $group:ty,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name {
            /// Concrete type this node was resolved to.
            pub kind: $crate::Kind,
            /// Declared `type` values, in document order.
            pub types: Vec<String>,
            $($(#[$fmeta])* pub $field: $group,)+
            /// Members outside the vocabulary, kept verbatim.
            pub extensions: serde_json::Map<String, serde_json::Value>,
        }

        impl $name {
            pub fn new(kind: $crate::Kind) -> Self {
                debug_assert_eq!(kind.shape(), $crate::Shape::$name, "{kind:?} is not a {}", stringify!($name));
                Self {
                    kind,
                    types: vec![kind.name().to_owned()],
                    $($field: Default::default(),)+
                    extensions: serde_json::Map::new(),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new($crate::Kind::$name)
            }
        }

        impl as_codec::VocabularyNode<$crate::Kind> for $name {
            fn read(
                kind: $crate::Kind,
                types: Vec<String>,
                reader: &mut as_codec::NodeReader<'_, $crate::Kind>,
            ) -> Result<Self, as_codec::CodecError> {
                $(let $field = <$group as $crate::properties::PropertyGroup>::read(reader)?;)+
                Ok(Self {
                    kind,
                    types,
                    $($field,)+
                    extensions: reader.remaining(),
                })
            }

            fn handle(&self) -> $crate::Kind {
                self.kind
            }

            fn types(&self) -> &[String] {
                &self.types
            }

            fn write(
                &self,
                writer: &mut as_codec::NodeWriter<'_, $crate::Kind>,
            ) -> Result<(), as_codec::CodecError> {
                writer.extend(&self.extensions);
                $($crate::properties::PropertyGroup::write(&self.$field, writer)?;)+
                Ok(())
            }

            fn check(&self) -> Result<(), as_codec::CodecError> {
                if self.kind.shape() == $crate::Shape::$name {
                    Ok(())
                } else {
                    Err(as_codec::CodecError::malformed(
                        as_codec::TYPE,
                        format!("{:?} is not held in a {} node", self.kind, stringify!($name)),
                    ))
                }
            }
        }
    };
}
