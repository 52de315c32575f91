use bpaint::{
    Additive, AnalogColor, Body, Catalog, CatalogError, ContainerSize, FillLevel, Inventory,
    Lightfastness, Medium, bcolor::PackedRgba,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn studio() -> Catalog {
    init_logging();
    Catalog::default()
}

#[test]
fn mixing_a_tan() {
    let mut catalog = studio();

    let umber = catalog
        .add_color(
            AnalogColor::new("Burnt Umber", "Golden", "1", Medium::Acrylic)
                .with_lightfastness(Lightfastness::I)
                .with_swatch_hex("#8a3324")
                .unwrap(),
        )
        .unwrap();
    let white = catalog
        .add_color(
            AnalogColor::new("Titanium White", "Golden", "1", Medium::Acrylic)
                .with_body(Body::Light)
                .with_opaqueness(90)
                .unwrap(),
        )
        .unwrap();
    let tan = catalog
        .add_color(AnalogColor::new("Tan", "Studio", "mix", Medium::Acrylic))
        .unwrap();

    catalog.add_ingredient(tan, umber, 1).unwrap();
    catalog.add_ingredient(tan, white, 4).unwrap();
    catalog.set_additive(tan, Additive::Water, 5).unwrap();
    catalog
        .update_color(tan, |color| {
            color.swatch = Some(bpaint::bcolor::DigitalColor::new(PackedRgba::from_rgb(210, 180, 140)));
        })
        .unwrap();

    similar_asserts::assert_eq!(
        catalog.describe_recipe(tan).unwrap().to_string(),
        "colors: Burnt Umber (acrylic) x1, Titanium White (acrylic) x4\nwater: 5"
    );
    assert_eq!(catalog.used_in(umber), vec![tan]);
    assert_eq!(
        catalog.color(umber).unwrap().swatch.as_ref().unwrap().hex(),
        "#8a3324ff"
    );
    assert_eq!(catalog.color(tan).unwrap().swatch.as_ref().unwrap().hsl().h, 34);

    // Running out of white:
    let mut jars = Inventory::new(white, ContainerSize::LargeJar);
    jars.add(FillLevel::Half, 1);
    catalog.add_inventory(jars).unwrap();
    assert_eq!(catalog.remove_color(white), Err(CatalogError::ColorInUse(white)));

    let jars = catalog.inventory_mut(white, ContainerSize::LargeJar).unwrap();
    assert!(jars.remove(FillLevel::Half, 2).is_err());
    jars.remove(FillLevel::Half, 1).unwrap();
    assert_eq!(catalog.total_containers(white), 0);

    catalog.remove_inventory(white, ContainerSize::LargeJar).unwrap();
    catalog.remove_color(white).unwrap();
    similar_asserts::assert_eq!(
        catalog.describe_recipe(tan).unwrap().colors,
        vec!["Burnt Umber (acrylic) x1".to_owned()]
    );
}

#[test]
fn keys_from_user_input() {
    let mut catalog = studio();
    let id = catalog
        .add_color(AnalogColor::new(
            "Ivory Black",
            "Winsor & Newton",
            "1",
            "OIL".parse().unwrap(),
        ))
        .unwrap();

    let size: ContainerSize = "medium_tube".parse().unwrap();
    catalog.add_inventory(Inventory::new(id, size)).unwrap();
    assert!(catalog.inventory(id, ContainerSize::MediumTube).is_some());

    let err = "bucket".parse::<ContainerSize>().unwrap_err();
    assert_eq!(err.to_string(), "unknown container size \"bucket\"");
}

#[test]
fn inventory_counts_partial_containers() {
    let mut catalog = studio();
    let id = catalog
        .add_color(AnalogColor::new("Sap Green", "Holbein", "B", Medium::Gouache))
        .unwrap();

    let mut tubes = Inventory::new(id, ContainerSize::SmallTube);
    tubes.add(FillLevel::Full, 1);
    tubes.add(FillLevel::ThreeFourths, 2);
    tubes.add(FillLevel::OneFourth, 2);
    catalog.add_inventory(tubes).unwrap();

    let mut sticks = Inventory::new(id, ContainerSize::Stick);
    sticks.add(FillLevel::Full, 3);
    catalog.add_inventory(sticks).unwrap();

    let tubes = catalog.inventory(id, ContainerSize::SmallTube).unwrap();
    assert_eq!(tubes.total(), 5);
    assert_eq!(tubes.full_equivalent(), 3.0);
    assert_eq!(catalog.total_containers(id), 8);
    assert_eq!(
        catalog
            .inventory_for(id)
            .map(Inventory::size)
            .collect::<Vec<_>>(),
        vec![ContainerSize::SmallTube, ContainerSize::Stick]
    );
}
