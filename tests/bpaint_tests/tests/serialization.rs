use bpaint::{
    Additive, AnalogColor, Catalog, ContainerSize, FillLevel, Inventory, Lightfastness, Medium,
    Recipe,
    bcolor::{DigitalColor, PackedRgba, decode_cmyk, decode_hsla},
};
use serde_json::json;

#[test]
fn digital_colors_store_the_packed_value() {
    let color = DigitalColor::named("Cadmium Red", PackedRgba::RED);
    let value = serde_json::to_value(&color).unwrap();
    assert_eq!(value, json!({ "name": "Cadmium Red", "value": 0xff00_00ff_u32 }));

    let back: DigitalColor = serde_json::from_value(value).unwrap();
    assert_eq!(back, color);
}

#[test]
fn views_serialize_as_plain_numbers() {
    let hsla = decode_hsla(PackedRgba::RED);
    assert_eq!(
        serde_json::to_value(hsla).unwrap(),
        json!({ "h": 0, "s": 100, "l": 50, "a": 1.0 })
    );
    assert_eq!(
        serde_json::to_value(decode_cmyk(PackedRgba::BLACK)).unwrap(),
        json!({ "c": 0, "m": 0, "y": 0, "k": 100 })
    );
}

#[test]
fn analog_colors_round_trip() {
    let color = AnalogColor::new("Indigo", "Daniel Smith", "2", Medium::Watercolor)
        .with_lightfastness(Lightfastness::II)
        .with_thickness(20)
        .unwrap()
        .with_swatch_hex("#4b0082")
        .unwrap();

    let value = serde_json::to_value(&color).unwrap();
    assert_eq!(value["medium"], json!("watercolor"));
    assert_eq!(value["body"], json!("heavy"));
    assert_eq!(value["lightfastness"], json!(2));
    assert_eq!(value["thickness"], json!(20));

    let back: AnalogColor = serde_json::from_value(value).unwrap();
    similar_asserts::assert_eq!(back, color);

    let mut broken = serde_json::to_value(&color).unwrap();
    broken["lightfastness"] = json!(4);
    assert!(serde_json::from_value::<AnalogColor>(broken).is_err());
}

#[test]
fn recipes_and_inventory_round_trip() {
    let mut catalog = Catalog::default();
    let ochre = catalog
        .add_color(AnalogColor::new("Yellow Ochre", "Golden", "1", Medium::Oil))
        .unwrap();
    let white = catalog
        .add_color(AnalogColor::new("Zinc White", "Golden", "1", Medium::Oil))
        .unwrap();
    catalog.add_ingredient(ochre, white, 2).unwrap();
    catalog.set_additive(ochre, Additive::Thinner, 15).unwrap();

    let recipe = catalog.recipe(ochre).unwrap();
    let json = serde_json::to_string(recipe).unwrap();
    let back: Recipe = serde_json::from_str(&json).unwrap();
    similar_asserts::assert_eq!(&back, recipe);
    assert_eq!(back.additive(Additive::Thinner), 15);

    let mut inventory = Inventory::new(white, ContainerSize::ExtraLargeTube);
    inventory.add(FillLevel::ThreeFourths, 2);
    let value = serde_json::to_value(&inventory).unwrap();
    assert_eq!(value["size"], json!("extra_large_tube"));
    let back: Inventory = serde_json::from_value(value).unwrap();
    assert_eq!(back, inventory);
}

#[test]
fn stored_values_outside_their_rules_are_rejected() {
    let color = AnalogColor::new("Indigo", "Daniel Smith", "2", Medium::Watercolor);
    let mut value = serde_json::to_value(&color).unwrap();
    value["glossiness"] = json!(250);
    let err = serde_json::from_value::<AnalogColor>(value).unwrap_err();
    assert!(err.to_string().contains("within 0-100"), "{err}");

    let mut hsla = serde_json::to_value(decode_hsla(PackedRgba::RED)).unwrap();
    hsla["s"] = json!(150);
    assert!(serde_json::from_value::<bpaint::bcolor::Hsla>(hsla).is_err());

    let mut catalog = Catalog::default();
    let ochre = catalog
        .add_color(AnalogColor::new("Yellow Ochre", "Golden", "1", Medium::Oil))
        .unwrap();
    let white = catalog
        .add_color(AnalogColor::new("Zinc White", "Golden", "1", Medium::Oil))
        .unwrap();
    catalog.add_ingredient(ochre, white, 1).unwrap();
    let good = serde_json::to_value(catalog.recipe(ochre).unwrap()).unwrap();
    assert!(serde_json::from_value::<Recipe>(good.clone()).is_ok());

    let mut repeated = good.clone();
    let ingredient = repeated["colors"][0].clone();
    repeated["colors"].as_array_mut().unwrap().push(ingredient);
    let err = serde_json::from_value::<Recipe>(repeated).unwrap_err();
    assert!(err.to_string().contains("more than once"), "{err}");

    let mut zero = good.clone();
    zero["colors"][0]["quantity"] = json!(0);
    assert!(serde_json::from_value::<Recipe>(zero).is_err());

    let mut too_much_oil = good;
    too_much_oil["additives"]["oil"] = json!(5000);
    let err = serde_json::from_value::<Recipe>(too_much_oil).unwrap_err();
    assert!(err.to_string().contains("outside 0-100"), "{err}");
}
