use crate::schema::{GML_NS, GPML_NS, GeometryContainer, PLATE_ID_PATH, POS_LIST_PATHS, ShapeKind};
use crate::types::{Feature, FeatureHeader};
use crate::{GeoPoint, GpmlError, PlateId, Result, Ring};
use log::{debug, trace};
use roxmltree::{Document, Node};
use std::collections::HashSet;

/// Walks the feature members of a parsed GPML feature collection
pub struct Parser<'a, 'input> {
    root: Node<'a, 'input>,
}

/// A feature member reduced to its header and shape element
struct Member<'a, 'input> {
    header: FeatureHeader,
    shape: Node<'a, 'input>,
}

impl<'a, 'input> Parser<'a, 'input> {
    pub fn new(doc: &'a Document<'input>) -> Result<Self> {
        let root = doc.root_element();
        let namespace = root.tag_name().namespace();
        if namespace != Some(GPML_NS) && namespace != Some(GML_NS) {
            return Err(GpmlError::InvalidStructure(format!(
                "Expected a GPML feature collection, got root element '{}' in namespace {:?}",
                root.tag_name().name(),
                namespace
            )));
        }
        Ok(Self { root })
    }

    pub fn scan(&self) -> Result<Vec<FeatureHeader>> {
        self.members()
            .map(|member| member.map(|m| m.header))
            .collect()
    }

    pub fn extract(&self, plate_ids: &HashSet<PlateId>) -> Result<Vec<Feature>> {
        let mut features = Vec::new();

        for member in self.members() {
            let Member { header, shape } = member?;
            if !plate_ids.contains(&header.plate_id) {
                trace!(
                    "Skipping feature {} ({}): plate {} not requested",
                    header.index, header.shape, header.plate_id
                );
                continue;
            }

            let (container, rings) = self.parse_geometry(&header, &shape)?;
            debug!(
                "Feature {} ({}, plate {}): {} ring(s) from {}",
                header.index,
                header.shape,
                header.plate_id,
                rings.len(),
                container
            );

            features.push(Feature {
                index: header.index,
                shape: header.shape,
                plate_id: header.plate_id,
                container,
                rings,
            });
        }

        debug!(
            "Extracted {} feature(s) for plates {:?}",
            features.len(),
            plate_ids
        );
        Ok(features)
    }

    fn members(&self) -> impl Iterator<Item = Result<Member<'a, 'input>>> + '_ {
        self.root
            .children()
            .filter(|n| n.has_tag_name((GML_NS, "featureMember")))
            .enumerate()
            .map(|(index, node)| self.parse_member(index, &node))
    }

    fn parse_member(&self, index: usize, node: &Node<'a, 'input>) -> Result<Member<'a, 'input>> {
        let mut elements = node.children().filter(|n| n.is_element());
        let shape = elements
            .next()
            .ok_or(GpmlError::MissingElement("feature shape element"))?;
        if elements.next().is_some() {
            return Err(GpmlError::InvalidStructure(format!(
                "featureMember {index} wraps more than one shape element"
            )));
        }

        let tag = shape.tag_name();
        if tag.namespace() != Some(GPML_NS) {
            return Err(GpmlError::InvalidStructure(format!(
                "featureMember {index}: shape element '{}' is not in the GPML namespace",
                tag.name()
            )));
        }

        let shape_kind = ShapeKind::from_local_name(tag.name());
        let plate_id = self.parse_plate_id(index, &shape)?;

        Ok(Member {
            header: FeatureHeader {
                index,
                shape: shape_kind,
                plate_id,
            },
            shape,
        })
    }

    fn parse_plate_id(&self, index: usize, shape: &Node) -> Result<PlateId> {
        let value = descend(*shape, GPML_NS, &PLATE_ID_PATH)
            .next()
            .ok_or(GpmlError::MissingElement(
                "gpml:reconstructionPlateId/gpml:ConstantValue/gpml:value",
            ))?;

        let text = value.text().unwrap_or("").trim();
        text.parse().map_err(|_| {
            GpmlError::InvalidStructure(format!(
                "featureMember {index}: invalid plate ID '{text}'"
            ))
        })
    }

    fn parse_geometry(
        &self,
        header: &FeatureHeader,
        shape: &Node,
    ) -> Result<(GeometryContainer, Vec<Ring>)> {
        let present = shape
            .children()
            .filter(|n| n.tag_name().namespace() == Some(GPML_NS))
            .filter_map(|n| GeometryContainer::from_local_name(n.tag_name().name()));

        let container = GeometryContainer::select(present).ok_or_else(|| {
            unsupported(
                header,
                "no outlineOf, boundary, unclassifiedGeometry or centerLineOf property".into(),
            )
        })?;

        let mut rings = Vec::new();
        for property in shape
            .children()
            .filter(|n| n.has_tag_name((GPML_NS, container.local_name())))
        {
            for value in descend(property, GPML_NS, &["ConstantValue", "value"]) {
                for path in POS_LIST_PATHS {
                    for pos_list in descend(value, GML_NS, path) {
                        rings.push(self.parse_pos_list(header, &pos_list)?);
                    }
                }
            }
        }

        if rings.is_empty() {
            return Err(unsupported(
                header,
                format!("{container} holds no polygon or line string coordinates"),
            ));
        }

        Ok((container, rings))
    }

    /// Parse a `gml:posList` of interleaved latitude/longitude values into a ring.
    fn parse_pos_list(&self, header: &FeatureHeader, node: &Node) -> Result<Ring> {
        if let Some(child) = node.children().find(|c| c.is_element()) {
            return Err(GpmlError::InvalidStructure(format!(
                "feature {} (plate {}): unexpected <{}> inside posList",
                header.index,
                header.plate_id,
                child.tag_name().name()
            )));
        }

        // Comments and processing instructions split the text into several nodes.
        let values = node
            .children()
            .filter(|c| c.is_text())
            .filter_map(|c| c.text())
            .flat_map(str::split_whitespace)
            .map(|token| {
                token.parse::<f64>().map_err(|_| {
                    GpmlError::InvalidCoordinate(format!(
                        "feature {} (plate {}): malformed number '{token}' in posList",
                        header.index, header.plate_id
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if values.len() % 2 != 0 {
            return Err(GpmlError::PosList {
                feature: header.index,
                plate_id: header.plate_id,
                count: values.len(),
            });
        }

        values
            .chunks_exact(2)
            .map(|pair| {
                GeoPoint::new(pair[0], pair[1]).map_err(|err| match err {
                    GpmlError::InvalidCoordinate(detail) => GpmlError::InvalidCoordinate(format!(
                        "feature {} (plate {}): {detail}",
                        header.index, header.plate_id
                    )),
                    other => other,
                })
            })
            .collect()
    }
}

fn unsupported(header: &FeatureHeader, detail: String) -> GpmlError {
    GpmlError::UnsupportedGeometry {
        feature: header.index,
        plate_id: header.plate_id,
        shape: header.shape.to_string(),
        detail,
    }
}

/// Every element reached from `node` by following `path` through child elements
/// in namespace `ns`, in document order.
fn descend<'a, 'input>(
    node: Node<'a, 'input>,
    ns: &'static str,
    path: &'static [&'static str],
) -> impl Iterator<Item = Node<'a, 'input>> {
    let mut frontier = vec![node];
    for name in path {
        frontier = frontier
            .into_iter()
            .flat_map(|n| n.children().filter(move |c| c.has_tag_name((ns, *name))))
            .collect();
    }
    frontier.into_iter()
}
