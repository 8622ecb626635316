use crate::entities::{Canvas, Instance, Item};
use crate::geometry::primitives::Dims;
use crate::io::ext_repr::ExtInstance;
use anyhow::{Result, ensure};
use itertools::Itertools;
use log::warn;

/// Imports an instance into the library
pub fn import(ext_instance: &ExtInstance) -> Result<Instance> {
    let canvas = Canvas::new(ext_instance.canvas.width, ext_instance.canvas.height)?;

    let items: Vec<(Item, usize)> = {
        let mut items = ext_instance
            .items
            .iter()
            .map(|ext_item| {
                ensure!(
                    ext_item.width > 0 && ext_item.height > 0,
                    "item {} has non-positive dimensions: {}x{}",
                    ext_item.id,
                    ext_item.width,
                    ext_item.height
                );
                let item = Item::new(ext_item.id as usize, Dims(ext_item.width, ext_item.height));
                Ok((item, ext_item.demand as usize))
            })
            .collect::<Result<Vec<(Item, usize)>>>()?;

        items.sort_by_key(|(item, _)| item.id);
        ensure!(
            items.iter().enumerate().all(|(i, (item, _))| item.id == i),
            "All items should have consecutive IDs starting from 0. IDs: {:?}",
            items.iter().map(|(item, _)| item.id).sorted().collect_vec()
        );
        items
    };

    for (item, _) in &items {
        if item.dims.width() > canvas.width || item.dims.height() > canvas.height {
            // kept in the instance; every placement of it will report InvalidSize
            warn!(
                "[IMPORT] item {} ({}x{}) exceeds the {}x{} canvas and can never be placed",
                item.id,
                item.dims.width(),
                item.dims.height(),
                canvas.width,
                canvas.height
            );
        }
    }

    Ok(Instance::new(items, canvas))
}
