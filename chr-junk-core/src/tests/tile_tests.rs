use super::*;
use crate::ErrorKind;

fn spec(width: u32, height: u32) -> TileSpec {
    TileSpec::new(width, height).unwrap()
}

#[test]
fn test_single_low_bit_is_top_left() {
    let mut raw = [0u8; 16];
    raw[0] = 0x80;
    let tile = decode_tile(&raw, &TileSpec::default()).unwrap();
    assert_eq!(tile.pixel(0, 0), 1);
    assert_eq!(tile.pixels().iter().filter(|&&p| p != 0).count(), 1);
}

#[test]
fn test_high_plane_sets_bit_one() {
    let mut raw = [0u8; 16];
    raw[8] = 0x80;
    let tile = decode_tile(&raw, &TileSpec::default()).unwrap();
    assert_eq!(tile.pixel(0, 0), 2);

    raw[0] = 0x80;
    let tile = decode_tile(&raw, &TileSpec::default()).unwrap();
    assert_eq!(tile.pixel(0, 0), 3);
}

#[test]
fn test_lsb_is_rightmost_column() {
    let mut raw = [0u8; 16];
    raw[3] = 0x01; // low plane, row 3
    raw[8 + 5] = 0x01; // high plane, row 5
    let tile = decode_tile(&raw, &TileSpec::default()).unwrap();
    assert_eq!(tile.pixel(7, 3), 1);
    assert_eq!(tile.pixel(7, 5), 2);
    assert_eq!(tile.pixel(6, 3), 0);
}

#[test]
fn test_known_pattern() {
    // Classic "1/2" glyph rows mixed across both planes
    let raw = [
        0x41, 0xC2, 0x44, 0x48, 0x10, 0x20, 0x40, 0x80, // low
        0x01, 0x02, 0x04, 0x08, 0x16, 0x21, 0x42, 0x87, // high
    ];
    let tile = decode_tile(&raw, &TileSpec::default()).unwrap();
    let row0: Vec<u8> = (0..8).map(|x| tile.pixel(x, 0)).collect();
    assert_eq!(row0, vec![0, 1, 0, 0, 0, 0, 0, 3]);
    let row7: Vec<u8> = (0..8).map(|x| tile.pixel(x, 7)).collect();
    assert_eq!(row7, vec![3, 0, 0, 0, 0, 2, 2, 2]);
}

#[test]
fn test_decode_shape() {
    let chr: Vec<u8> = (0..8192).map(|i| (i * 7 % 256) as u8).collect();
    let tiles = decode_tiles(&chr, &TileSpec::default()).unwrap();
    assert_eq!(tiles.len(), 512);
    for tile in &tiles {
        assert_eq!(tile.width(), 8);
        assert_eq!(tile.height(), 8);
        assert_eq!(tile.pixels().len(), 64);
        assert!(tile.pixels().iter().all(|&p| p <= 3));
    }
}

#[test]
fn test_decode_preserves_order() {
    let mut chr = vec![0u8; 48];
    chr[16] = 0x80; // tile 1, top-left = 1
    chr[32 + 8] = 0xFF; // tile 2, first row = 2
    let tiles = decode_tiles(&chr, &TileSpec::default()).unwrap();
    assert_eq!(tiles.len(), 3);
    assert!(tiles[0].pixels().iter().all(|&p| p == 0));
    assert_eq!(tiles[1].pixel(0, 0), 1);
    assert_eq!(tiles[2].pixels()[..8], [2; 8]);
}

#[test]
fn test_size_mismatch_rejected() {
    let chr = vec![0u8; 8192];
    let err = decode_tiles(&chr, &spec(8, 5)).unwrap_err();
    assert!(matches!(
        err,
        TileError::SizeMismatch {
            chr_size: 8192,
            bytes_per_tile: 10
        }
    ));
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn test_empty_chr_yields_no_tiles() {
    let tiles = decode_tiles(&[], &TileSpec::default()).unwrap();
    assert!(tiles.is_empty());
}

#[test]
fn test_tall_tile_plane_offset() {
    // 8x16: low plane is bytes 0..16, high plane 16..32
    let mut raw = [0u8; 32];
    raw[15] = 0x80;
    raw[16] = 0x80;
    let tile = decode_tile(&raw, &spec(8, 16)).unwrap();
    assert_eq!(tile.height(), 16);
    assert_eq!(tile.pixel(0, 15), 1);
    assert_eq!(tile.pixel(0, 0), 2);
}

#[test]
fn test_narrow_tile_uses_high_bits() {
    let mut raw = [0u8; 8];
    raw[0] = 0x0F; // only the right half of the byte
    raw[1] = 0xA0;
    let tile = decode_tile(&raw, &spec(4, 4)).unwrap();
    assert_eq!(tile.pixels().len(), 16);
    assert_eq!(&tile.pixels()[0..4], &[0, 0, 0, 0]);
    assert_eq!(&tile.pixels()[4..8], &[1, 0, 1, 0]);
}

#[test]
fn test_decode_tile_wrong_length() {
    let err = decode_tile(&[0u8; 15], &TileSpec::default()).unwrap_err();
    assert!(matches!(err, TileError::SizeMismatch { chr_size: 15, .. }));
}

#[test]
fn test_tile_spec_validation() {
    assert!(matches!(
        TileSpec::new(0, 8),
        Err(TileError::InvalidTileSize(_))
    ));
    assert!(matches!(
        TileSpec::new(8, 0),
        Err(TileError::InvalidTileSize(_))
    ));
    let err = TileSpec::new(9, 8).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
    // Tall tiles are only warned about
    assert_eq!(TileSpec::new(8, 32).unwrap().bytes_per_tile(), 64);
    assert_eq!(TileSpec::new(1, 1).unwrap().pixel_count(), 1);
}

#[test]
fn test_grid_position() {
    let s = TileSpec::default();
    assert_eq!(s.grid_position(0), (0, 0));
    assert_eq!(s.grid_position(15), (120, 0));
    assert_eq!(s.grid_position(16), (0, 8));
    assert_eq!(s.grid_position(17), (8, 8));

    let s = spec(4, 16);
    assert_eq!(s.grid_position(33), (4, 32));
}

#[test]
fn test_tile_count() {
    let s = TileSpec::default();
    assert_eq!(tile_count(8192, &s).unwrap(), 512);
    assert_eq!(tile_count(16, &s).unwrap(), 1);
    assert!(tile_count(17, &s).is_err());
}
